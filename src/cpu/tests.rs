use crate::{
    bus::{Bus, MemoryBus},
    cpu::{
        cpu::CPU,
        flags::{FLAG_CARRY, FLAG_HALF_CARRY, FLAG_SUBTRACT, FLAG_ZERO, Flags},
    },
};

/// Place `program` at the cartridge entry point ($0100) and boot a CPU on it.
fn new_cpu(program: &[u8]) -> CPU<MemoryBus> {
    let mut bus = MemoryBus::new();
    for (i, &byte) in program.iter().enumerate() {
        bus.mem[0x0100 + i] = byte;
    }
    CPU::new(bus)
}

#[test]
fn boots_with_documented_register_values() {
    let cpu = new_cpu(&[]);
    let regs = cpu.registers();

    assert_eq!(regs.a, 0x01);
    assert_eq!(regs.f.bits(), 0xB0);
    assert_eq!(regs.bc(), 0x0013);
    assert_eq!(regs.de(), 0x00D8);
    assert_eq!(regs.hl(), 0x014D);
    assert_eq!(cpu.sp(), 0xFFFE);
    assert_eq!(cpu.pc(), 0x0100);
}

#[test]
fn add_immediate_sets_half_carry() {
    let mut cpu = new_cpu(&[0xC6, 0x01]); // ADD A, $01
    cpu.regs.a = 0x0F;

    cpu.step();

    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.flags(), Flags::new(false, false, true, false));
    assert_eq!(cpu.pc(), 0x0102);
}

#[test]
fn sub_a_from_itself_is_zero() {
    let mut cpu = new_cpu(&[0x97]); // SUB A
    cpu.regs.a = 0x00;

    cpu.step();

    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.flags(), Flags::new(true, true, false, false));
}

#[test]
fn sbc_immediate_borrows_carry() {
    let mut cpu = new_cpu(&[0x37, 0xDE, 0x0F]); // SCF; SBC A, $0F
    cpu.regs.a = 0x10;

    cpu.step();
    cpu.step();

    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.flags(), Flags::new(true, true, true, false));
}

#[test]
fn compare_leaves_accumulator_alone() {
    let mut cpu = new_cpu(&[0xFE, 0x10]); // CP $10
    cpu.regs.a = 0x10;

    cpu.step();

    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.flags().zero());
    assert!(cpu.flags().subtract());
}

#[test]
fn xor_a_clears_accumulator_and_flags() {
    let mut cpu = new_cpu(&[0xAF]); // XOR A

    cpu.step();

    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.flags().bits(), FLAG_ZERO);
}

#[test]
fn and_register_sets_half_carry() {
    let mut cpu = new_cpu(&[0xA0]); // AND B
    cpu.regs.a = 0xF0;
    cpu.regs.b = 0x3C;

    cpu.step();

    assert_eq!(cpu.regs.a, 0x30);
    assert_eq!(cpu.flags().bits(), FLAG_HALF_CARRY);
}

#[test]
fn inc_r_keeps_carry() {
    let mut cpu = new_cpu(&[0x3C]); // INC A (boot F has C set)

    cpu.step();

    assert_eq!(cpu.regs.a, 0x02);
    assert_eq!(cpu.flags().bits(), FLAG_CARRY);
}

#[test]
fn inc_memory_via_hl() {
    let mut cpu = new_cpu(&[0x34]); // INC (HL)
    cpu.regs.set_hl(0xC000);
    cpu.bus.write(0xC000, 0xFF);

    cpu.step();

    assert_eq!(cpu.bus.read(0xC000), 0x00);
    assert!(cpu.flags().zero());
    assert!(cpu.flags().half_carry());
    assert!(!cpu.flags().subtract());
}

#[test]
fn dec_r_sets_subtract() {
    let mut cpu = new_cpu(&[0x05]); // DEC B
    cpu.regs.b = 0x01;
    cpu.regs.f = Flags::default();

    cpu.step();

    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.flags().bits(), FLAG_ZERO | FLAG_SUBTRACT);
}

#[test]
fn sixteen_bit_inc_dec_leave_flags() {
    let mut cpu = new_cpu(&[0x03, 0x1B, 0x33]); // INC BC; DEC DE; INC SP

    cpu.step();
    cpu.step();
    cpu.step();

    assert_eq!(cpu.regs.bc(), 0x0014);
    assert_eq!(cpu.regs.de(), 0x00D7);
    assert_eq!(cpu.sp(), 0xFFFF);
    assert_eq!(cpu.flags().bits(), 0xB0);
}

#[test]
fn add_hl_keeps_zero_flag() {
    let mut cpu = new_cpu(&[0x09]); // ADD HL, BC
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);

    cpu.step();

    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(cpu.flags().bits(), FLAG_ZERO | FLAG_HALF_CARRY);
}

#[test]
fn add_sp_signed_offset() {
    let mut cpu = new_cpu(&[0xE8, 0xFE]); // ADD SP, -2

    cpu.step();

    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(cpu.flags(), Flags::new(false, false, true, true));
}

#[test]
fn daa_after_bcd_add() {
    let mut cpu = new_cpu(&[0xC6, 0x27, 0x27]); // ADD A, $27; DAA
    cpu.regs.a = 0x15;

    cpu.step();
    cpu.step();

    assert_eq!(cpu.regs.a, 0x42);
    assert!(!cpu.flags().carry());
}

#[test]
fn cpl_scf_ccf() {
    let mut cpu = new_cpu(&[0x2F, 0x37, 0x3F]); // CPL; SCF; CCF
    cpu.regs.a = 0x35;

    cpu.step();
    assert_eq!(cpu.regs.a, 0xCA);
    assert!(cpu.flags().subtract() && cpu.flags().half_carry());

    cpu.step();
    assert_eq!(cpu.flags().bits(), FLAG_ZERO | FLAG_CARRY);

    cpu.step();
    assert_eq!(cpu.flags().bits(), FLAG_ZERO);
}

#[test]
fn rlca_always_clears_zero() {
    let mut cpu = new_cpu(&[0x07]); // RLCA
    cpu.regs.a = 0x00;

    cpu.step();

    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.flags().bits(), 0x00);
}

#[test]
fn rra_rotates_through_carry() {
    let mut cpu = new_cpu(&[0x1F]); // RRA (boot C is set)
    cpu.regs.a = 0x01;

    cpu.step();

    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.flags().bits(), FLAG_CARRY);
}

#[test]
fn ld_register_to_register_and_memory() {
    // LD B, A; LD (HL), B; LD E, (HL)
    let mut cpu = new_cpu(&[0x47, 0x70, 0x5E]);
    cpu.regs.a = 0x3A;
    cpu.regs.set_hl(0xC123);

    cpu.step();
    cpu.step();
    cpu.step();

    assert_eq!(cpu.regs.b, 0x3A);
    assert_eq!(cpu.bus.read(0xC123), 0x3A);
    assert_eq!(cpu.regs.e, 0x3A);
}

#[test]
fn ld_pair_immediate_is_little_endian() {
    let mut cpu = new_cpu(&[0x11, 0x34, 0x12]); // LD DE, $1234

    cpu.step();

    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.pc(), 0x0103);
}

#[test]
fn ld_hl_increment_and_decrement() {
    // LD HL, $C000; LD A, $42; LD (HL+), A; LD (HL-), A
    let mut cpu = new_cpu(&[0x21, 0x00, 0xC0, 0x3E, 0x42, 0x22, 0x32]);

    cpu.step();
    cpu.step();
    cpu.step();
    assert_eq!(cpu.bus.read(0xC000), 0x42);
    assert_eq!(cpu.regs.hl(), 0xC001);

    cpu.step();
    assert_eq!(cpu.bus.read(0xC001), 0x42);
    assert_eq!(cpu.regs.hl(), 0xC000);

    // Stores through work RAM land in the echo too.
    assert_eq!(cpu.bus.read(0xE001), 0x42);
}

#[test]
fn ld_a_from_hl_increment() {
    let mut cpu = new_cpu(&[0x2A, 0x3A]); // LD A, (HL+); LD A, (HL-)
    cpu.regs.set_hl(0xC010);
    cpu.bus.write(0xC010, 0x11);
    cpu.bus.write(0xC011, 0x22);

    cpu.step();
    assert_eq!(cpu.regs.a, 0x11);
    cpu.step();
    assert_eq!(cpu.regs.a, 0x22);
    assert_eq!(cpu.regs.hl(), 0xC010);
}

#[test]
fn high_page_loads() {
    // LD A, $77; LDH ($80), A; LD A, $00; LDH A, ($80); LD (C), A
    let mut cpu = new_cpu(&[0x3E, 0x77, 0xE0, 0x80, 0x3E, 0x00, 0xF0, 0x80, 0xE2]);
    cpu.regs.c = 0x81;

    for _ in 0..5 {
        cpu.step();
    }

    assert_eq!(cpu.bus.read(0xFF80), 0x77);
    assert_eq!(cpu.regs.a, 0x77);
    assert_eq!(cpu.bus.read(0xFF81), 0x77);
}

#[test]
fn ld_absolute_address() {
    // LD A, $99; LD ($C200), A; LD A, $00; LD A, ($C200)
    let mut cpu = new_cpu(&[0x3E, 0x99, 0xEA, 0x00, 0xC2, 0x3E, 0x00, 0xFA, 0x00, 0xC2]);

    for _ in 0..4 {
        cpu.step();
    }

    assert_eq!(cpu.bus.read(0xC200), 0x99);
    assert_eq!(cpu.regs.a, 0x99);
}

#[test]
fn ld_hl_sp_plus_offset() {
    let mut cpu = new_cpu(&[0xF8, 0x08]); // LD HL, SP+8
    cpu.regs.sp = 0xFFF8;

    cpu.step();

    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.flags(), Flags::new(false, false, true, true));
    assert_eq!(cpu.sp(), 0xFFF8);
}

#[test]
fn ld_absolute_sp_stores_both_bytes() {
    let mut cpu = new_cpu(&[0x08, 0x00, 0xC1]); // LD ($C100), SP

    cpu.step();

    assert_eq!(cpu.bus.read(0xC100), 0xFE);
    assert_eq!(cpu.bus.read(0xC101), 0xFF);
}

#[test]
fn push_pop_round_trip() {
    // PUSH BC; LD BC, $0000; POP BC
    let mut cpu = new_cpu(&[0xC5, 0x01, 0x00, 0x00, 0xC1]);
    cpu.regs.set_bc(0x1234);

    cpu.step();
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(cpu.bus.read(0xFFFD), 0x12);
    assert_eq!(cpu.bus.read(0xFFFC), 0x34);

    cpu.step();
    assert_eq!(cpu.regs.bc(), 0x0000);

    cpu.step();
    assert_eq!(cpu.regs.bc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn pop_af_masks_low_nibble() {
    let mut cpu = new_cpu(&[0xC5, 0xF1]); // PUSH BC; POP AF
    cpu.regs.set_bc(0x12FF);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.flags().bits(), 0xF0);
}

#[test]
fn jp_nz_not_taken_when_zero_set() {
    let mut cpu = new_cpu(&[0xC2, 0x34, 0x12]); // JP NZ, $1234
    cpu.regs.f.set_zero(true);

    cpu.step();

    assert_eq!(cpu.pc(), 0x0103);
}

#[test]
fn jp_nz_taken_when_zero_clear() {
    let mut cpu = new_cpu(&[0xC2, 0x34, 0x12]); // JP NZ, $1234
    cpu.regs.f.set_zero(false);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn jp_hl() {
    let mut cpu = new_cpu(&[0xE9]); // JP (HL)
    cpu.regs.set_hl(0x4000);

    cpu.step();

    assert_eq!(cpu.pc(), 0x4000);
}

#[test]
fn jr_nz_loops_until_zero() {
    // LD B, 3; DEC B; JR NZ, -3
    let mut cpu = new_cpu(&[0x06, 0x03, 0x05, 0x20, 0xFD]);

    for _ in 0..7 {
        cpu.step();
    }

    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.pc(), 0x0105);
}

#[test]
fn jr_c_forward() {
    let mut cpu = new_cpu(&[0x38, 0x10]); // JR C, +16 (boot C is set)

    cpu.step();

    assert_eq!(cpu.pc(), 0x0112);
}

#[test]
fn call_and_ret_are_symmetric() {
    let mut cpu = new_cpu(&[0xCD, 0x34, 0x12]); // CALL $1234
    cpu.bus.mem[0x1234] = 0xC9; // RET

    cpu.step();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(cpu.bus.read(0xFFFD), 0x01);
    assert_eq!(cpu.bus.read(0xFFFC), 0x03);

    cpu.step();
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn conditional_call_not_taken_leaves_stack() {
    let mut cpu = new_cpu(&[0xC4, 0x34, 0x12]); // CALL NZ, $1234 (boot Z is set)

    cpu.step();

    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn conditional_return() {
    // CALL $0200; at $0200: RET NZ (not taken), RET Z (taken)
    let mut cpu = new_cpu(&[0xCD, 0x00, 0x02]);
    cpu.bus.mem[0x0200] = 0xC0;
    cpu.bus.mem[0x0201] = 0xC8;

    cpu.step();
    cpu.step();
    assert_eq!(cpu.pc(), 0x0201);

    cpu.step();
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn rst_calls_fixed_vector() {
    let mut cpu = new_cpu(&[0xEF]); // RST $28

    cpu.step();

    assert_eq!(cpu.pc(), 0x0028);
    assert_eq!(cpu.bus.read(0xFFFD), 0x01);
    assert_eq!(cpu.bus.read(0xFFFC), 0x01);
}

#[test]
fn reti_enables_interrupts() {
    let mut cpu = new_cpu(&[0xF3, 0xCD, 0x00, 0x02]); // DI; CALL $0200
    cpu.bus.mem[0x0200] = 0xD9; // RETI
    cpu.ime = true;

    cpu.step();
    assert!(!cpu.ime);
    cpu.step();
    cpu.step();

    assert!(cpu.ime);
    assert_eq!(cpu.pc(), 0x0104);
}

#[test]
fn bit_test_sets_zero_from_bit() {
    // BIT 7, H; BIT 0, H
    let mut cpu = new_cpu(&[0xCB, 0x7C, 0xCB, 0x44]);
    cpu.regs.h = 0x80;
    cpu.regs.f = Flags::from_bits(FLAG_CARRY | FLAG_SUBTRACT);

    cpu.step();
    assert_eq!(cpu.flags().bits(), FLAG_HALF_CARRY | FLAG_CARRY);
    assert_eq!(cpu.pc(), 0x0102);

    cpu.step();
    assert_eq!(cpu.flags().bits(), FLAG_ZERO | FLAG_HALF_CARRY | FLAG_CARRY);
    assert_eq!(cpu.regs.h, 0x80);
}

#[test]
fn set_and_res_bits() {
    // SET 3, (HL); RES 7, A
    let mut cpu = new_cpu(&[0xCB, 0xDE, 0xCB, 0xBF]);
    cpu.regs.set_hl(0xC000);
    cpu.regs.a = 0xFF;
    let flags = cpu.flags();

    cpu.step();
    cpu.step();

    assert_eq!(cpu.bus.read(0xC000), 0x08);
    assert_eq!(cpu.regs.a, 0x7F);
    assert_eq!(cpu.flags(), flags);
}

#[test]
fn swap_nibbles() {
    let mut cpu = new_cpu(&[0xCB, 0x37]); // SWAP A
    cpu.regs.a = 0xF1;

    cpu.step();

    assert_eq!(cpu.regs.a, 0x1F);
    assert_eq!(cpu.flags().bits(), 0x00);
}

#[test]
fn rl_register_through_carry() {
    let mut cpu = new_cpu(&[0xCB, 0x11]); // RL C (boot C is set)
    cpu.regs.c = 0x80;

    cpu.step();

    assert_eq!(cpu.regs.c, 0x01);
    assert_eq!(cpu.flags().bits(), FLAG_CARRY);
}

#[test]
fn srl_memory_via_hl() {
    let mut cpu = new_cpu(&[0xCB, 0x3E]); // SRL (HL)
    cpu.regs.set_hl(0xC000);
    cpu.bus.write(0xC000, 0x01);

    cpu.step();

    assert_eq!(cpu.bus.read(0xC000), 0x00);
    assert_eq!(cpu.flags().bits(), FLAG_ZERO | FLAG_CARRY);
}

#[test]
fn unrecognized_opcode_is_skipped() {
    let mut cpu = new_cpu(&[0xD3, 0x3C]); // <undefined>; INC A
    let before = *cpu.registers();

    cpu.step();

    let after = *cpu.registers();
    assert_eq!(after.pc, 0x0101);
    assert_eq!(after.sp, before.sp);
    assert_eq!(after.af(), before.af());
    assert_eq!(after.bc(), before.bc());
    assert_eq!(after.de(), before.de());
    assert_eq!(after.hl(), before.hl());

    cpu.step();
    assert_eq!(cpu.regs.a, 0x02);
}

#[test]
fn halt_stops_stepping() {
    let mut cpu = new_cpu(&[0x76, 0x3C]); // HALT; INC A

    cpu.step();
    cpu.step();

    assert!(cpu.halted);
    assert_eq!(cpu.pc(), 0x0101);
    assert_eq!(cpu.regs.a, 0x01);
}

#[test]
fn borrowed_bus_is_shared_with_host() {
    let mut bus = MemoryBus::new();
    // LD A, $99; LD ($C000), A
    for (i, byte) in [0x3E, 0x99, 0xEA, 0x00, 0xC0].into_iter().enumerate() {
        bus.mem[0x0100 + i] = byte;
    }

    {
        let mut cpu = CPU::new(&mut bus);
        cpu.step();
        cpu.step();
    }

    assert_eq!(bus.read(0xC000), 0x99);
    assert_eq!(bus.read(0xE000), 0x99);
}

#[test]
fn trace_line_shows_registers() {
    let cpu = new_cpu(&[]);

    assert_eq!(
        cpu.trace_line(0x0100, 0x00, false),
        "0100  00     A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE"
    );
    assert!(cpu.trace_line(0x0100, 0x7C, true).starts_with("0100  CB 7C  A:01"));
}

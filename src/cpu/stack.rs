use crate::{bus::Bus, cpu::cpu::CPU};

impl<B: Bus> CPU<B> {
    /// PUSH rr / POP rr, where the pair index 3 selects AF rather than SP.
    pub(super) fn execute_stack(&mut self, opcode: u8) {
        let rr = (opcode >> 4) & 3;
        if opcode & 0x0F == 0x05 {
            let value = if rr == 3 {
                self.regs.af()
            } else {
                self.read_r16(rr)
            };
            self.push(value);
        } else {
            let value = self.pop();
            if rr == 3 {
                self.regs.set_af(value);
            } else {
                self.write_r16(rr, value);
            }
        }
    }
}

//! Game Boy emulator entry point.
//!
//! Loads a cartridge and steps the CPU inside a window.
//! Usage: gbemu [--trace] path/to/game.gb

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use gbemu::{
    bus::MemoryBus,
    cartridge::Cartridge,
    config::{Config, WindowScale},
    cpu::cpu::CPU,
    logger,
};
use log::{error, info};
use minifb::{Key, Scale, Window, WindowOptions};

const WIDTH: usize = 160;
const HEIGHT: usize = 144;

/// DMG refresh is ~59.7 Hz; pace at 60.
const FRAME_DURATION: Duration = Duration::from_nanos(16_666_667);

/// Blank screen colour (lightest DMG green).
const BLANK: u32 = 0x00E0_F8D0;

/// Everything the host loop needs, in one place.
struct Session {
    config: Config,
    window: Window,
    framebuffer: Vec<u32>,
    frames: u64,
    quit: bool,
}

impl Session {
    fn new(config: Config) -> Result<Self, minifb::Error> {
        let scale = match config.scale {
            WindowScale::X1 => Scale::X1,
            WindowScale::X2 => Scale::X2,
            WindowScale::X4 => Scale::X4,
            WindowScale::X8 => Scale::X8,
        };
        let mut window = Window::new(
            "gbemu",
            WIDTH,
            HEIGHT,
            WindowOptions {
                scale,
                ..WindowOptions::default()
            },
        )?;
        window.set_target_fps(60);

        Ok(Self {
            config,
            window,
            framebuffer: vec![BLANK; WIDTH * HEIGHT],
            frames: 0,
            quit: false,
        })
    }

    fn handle_events(&mut self) {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            self.quit = true;
        }
    }

    fn present(&mut self) -> Result<(), minifb::Error> {
        self.window.set_title(&format!("gbemu - frame {}", self.frames));
        self.window
            .update_with_buffer(&self.framebuffer, WIDTH, HEIGHT)
    }

    fn run(&mut self, cpu: &mut CPU<&mut MemoryBus>) -> Result<(), minifb::Error> {
        let steps_per_frame = self.config.steps_per_frame;

        while !self.quit {
            let frame_start = Instant::now();
            self.handle_events();

            for _ in 0..steps_per_frame {
                cpu.step();
                if cpu.halted {
                    info!("CPU halted at ${:04X}", cpu.pc());
                    self.quit = true;
                    break;
                }
            }

            self.present()?;
            self.frames += 1;

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_DURATION {
                std::thread::sleep(FRAME_DURATION - elapsed);
            }
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(err) = logger::init(config.level_filter()) {
        eprintln!("{err}");
    }

    let cart = match Cartridge::load(&config.rom) {
        Ok(cart) => cart,
        Err(err) => {
            error!("{}: {err}", config.rom.display());
            return ExitCode::FAILURE;
        }
    };

    let mut memory = MemoryBus::new();
    if let Err(err) = cart.install(&mut memory) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            error!("failed to create window: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut cpu = CPU::new(&mut memory);
    if let Err(err) = session.run(&mut cpu) {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

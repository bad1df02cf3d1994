use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use c8vm::{Chip8, Quirks, TIMER_FREQUENCY};
use display::Display;

use crate::audio::Beeper;
use crate::keymap::keymap;
use crate::Args;

pub fn run(args: Args) -> anyhow::Result<()> {
    let quirks = if args.vip {
        Quirks::cosmac_vip()
    } else {
        Quirks::modern()
    };
    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    }
    .with_quirks(quirks);

    // Load ROM before opening any windows so a bad file fails fast
    let file = File::open(&args.rom).with_context(|| format!("unable to open {:?}", args.rom))?;
    let mut reader = BufReader::new(file);
    chip8.reset();
    chip8
        .load_rom_from(&mut reader)
        .with_context(|| format!("unable to load {:?}", args.rom))?;
    info!("loaded {:?}", args.rom);

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, args.scale).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut beeper = match Beeper::new(&sdl) {
        Ok(beeper) => Some(beeper),
        Err(e) => {
            warn!("no audio device, running muted: {}", e);
            None
        }
    };

    // Set initial timing
    let frame_time = Duration::from_secs(1) / TIMER_FREQUENCY;
    let steps_per_frame = (args.ips / TIMER_FREQUENCY).max(1);

    // Whether or not the default clock speed should be respected
    let mut fast_forward: bool = false;

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        for _ in 0..steps_per_frame {
            if let Err(e) = chip8.step() {
                error!("halted at {:#05X}: {}", chip8.pc(), e);
                return Err(e.into());
            }
        }
        chip8.tick_timers();
        if let Some(beeper) = beeper.as_mut() {
            beeper.set(chip8.is_beeping());
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.get_frame() {
            display.render(frame).map_err(|e| anyhow!(e))?;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    info!("exiting");
    Ok(())
}

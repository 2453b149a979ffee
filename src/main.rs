//! scope-preview: run the demo scenes on a simulated phosphor scope.

use beamtrace::demos::{Clock, Demo, Marquee, Radar, Wireframe};
use beamtrace::display::{Display, InputEvent, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use beamtrace::font::size_string;
use beamtrace::remote::RemoteText;
use beamtrace::{Beam, DisplayProfile, PhosphorScreen};
use sdl2::keyboard::Keycode;
use std::collections::VecDeque;
use std::time::Instant;

/// Per-frame phosphor persistence
const DECAY: f32 = 0.82;

struct Args {
    width: u32,
    height: u32,
    vsync: bool,
    profile: Option<String>,
    mqtt_host: Option<String>,
}

/// Parse command line arguments
fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        vsync: true,
        profile: None,
        mqtt_host: None,
    };

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--no-vsync" => args.vsync = false,
            "--resolution" | "-r" => {
                if i + 1 < argv.len() {
                    // Parse WxH format (e.g., 1024x1024)
                    let parts: Vec<&str> = argv[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            args.width = w;
                            args.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--profile" | "-p" => {
                if i + 1 < argv.len() {
                    args.profile = Some(argv[i + 1].clone());
                    i += 1;
                }
            },
            "--mqtt" => {
                if i + 1 < argv.len() {
                    args.mqtt_host = Some(argv[i + 1].clone());
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: scope-preview [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --resolution WxH, -r WxH  Window size (default: {}x{})",
                    DEFAULT_WIDTH, DEFAULT_HEIGHT
                );
                println!("  --profile FILE, -p FILE   Display profile JSON (default: 12-bit DAC)");
                println!("  --mqtt HOST               Receive text overlays from an MQTT broker");
                println!("  --no-vsync                Disable VSync for uncapped framerate");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    args
}

/// FPS counter with rolling average
struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
}

impl FpsCounter {
    fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count,
        }
    }

    /// Call at the start of each frame. Returns (delta_time, average_fps).
    fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }

        let avg_dt: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32;
        let avg_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };

        (dt, avg_fps)
    }
}

fn main() -> Result<(), String> {
    let args = parse_args();

    let profile = match &args.profile {
        Some(path) => DisplayProfile::load(path)?,
        None => DisplayProfile::dac_12bit(),
    };

    let remote = match &args.mqtt_host {
        Some(host) => Some(RemoteText::new(host, RemoteText::default_topic())?),
        None => None,
    };

    let (mut display, texture_creator) =
        Display::with_options("scope-preview", args.width, args.height, args.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, args.width, args.height)?;

    let screen = PhosphorScreen::new(args.width, args.height, profile.max_x, profile.max_y);
    let mut beam = Beam::new(screen, &profile);

    let mut demos: Vec<Box<dyn Demo>> = vec![
        Box::new(Clock::new()),
        Box::new(Wireframe::new()),
        Box::new(Radar::new()),
        Box::new(Marquee::new("THE BEAM IS THE FRAME BUFFER")),
    ];
    let mut current = 0usize;

    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;

    // (text, seconds remaining)
    let mut overlay: Option<(String, f32)> = None;

    println!("=== scope-preview ===");
    println!(
        "DAC range: 0..{} x 0..{}",
        profile.max_x, profile.max_y
    );
    println!("Controls:");
    println!("  Left/Right - Cycle through demos");
    println!("  F          - Toggle FPS readout");
    println!("  Escape     - Quit");

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Left => {
                        current = (current + demos.len() - 1) % demos.len();
                        println!("Demo: {}", demos[current].name());
                    },
                    Keycode::Right => {
                        current = (current + 1) % demos.len();
                        println!("Demo: {}", demos[current].name());
                    },
                    Keycode::F => show_fps = !show_fps,
                    _ => {},
                },
            }
        }

        if let Some(remote) = &remote {
            if let Some(msg) = remote.poll() {
                overlay = Some((msg.text, msg.ttl));
            }
        }

        beam.writer_mut().decay(DECAY);

        let demo = &mut demos[current];
        demo.update(dt);
        demo.render(&mut beam);

        if let Some((text, ttl)) = &mut overlay {
            let x = (beam.max_x() - size_string(text, 5)) / 2;
            let y = beam.max_y() / 8;
            beam.draw_string(text, x, y, 5);
            *ttl -= dt;
        }
        if overlay.as_ref().is_some_and(|(_, ttl)| *ttl <= 0.0) {
            overlay = None;
        }

        if show_fps {
            let fps_text = format!("{} FPS", avg_fps as u32);
            beam.draw_string(&fps_text, 100, beam.max_y() - 200, 3);
        }

        let rgba = beam.writer_mut().render_rgba();
        display.present(&mut target, rgba)?;
    }

    Ok(())
}

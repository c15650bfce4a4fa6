#[cfg(not(feature = "streaming"))]
fn main() {
    eprintln!(
        "The loopscape CLI requires the \"streaming\" feature. Rebuild with `--features streaming` to enable playback."
    );
}

#[cfg(feature = "streaming")]
mod cli {
    use std::env;
    use std::io::{self, BufRead, Write};

    use anyhow::Context;

    use loopscape::catalog::{AmbientSound, MusicCategory};
    use loopscape::locator::DirectoryLocator;
    use loopscape::mixer::Mixer;
    use loopscape::power::PowerEvent;
    use loopscape::streaming::RodioBackend;
    use loopscape::AppConfig;

    pub fn run() -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();

        let config_path = env::args()
            .nth(1)
            .unwrap_or_else(|| "loopscape.json".to_string());
        let config = AppConfig::load_or_default(&config_path).context("loading configuration")?;

        let backend = RodioBackend::new().context("opening audio output")?;
        let locator = DirectoryLocator::new(&config.library_dir);
        let mixer = Mixer::new(Box::new(backend), Box::new(locator));
        mixer.set_master_volume(config.master_volume);
        mixer.set_music_volume(config.music_volume);
        let _watcher = mixer
            .start_watcher(config.poll_interval())
            .context("starting completion watcher")?;

        println!(
            "loopscape — library at {}. Type `help` for commands.",
            config.library_dir.display()
        );
        print_status(&mixer);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            print!("> ");
            stdout.flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            if !dispatch(&mixer, line.trim())? {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line; returns false when the session should end.
    fn dispatch(mixer: &Mixer, line: &str) -> anyhow::Result<bool> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(true);
        };
        let argument = words.next();

        match command.to_ascii_lowercase().as_str() {
            "play" => mixer.set_playing(true),
            "pause" => mixer.set_playing(false),
            "next" => mixer.advance_track(),
            "sleep" => mixer.handle_power_event(PowerEvent::WillSleep),
            "wake" => mixer.handle_power_event(PowerEvent::DidWake),
            "status" => print_status(mixer),
            "help" => print_help(),
            "quit" | "exit" => return Ok(false),
            "master" => {
                if let Some(volume) = parse_volume(argument) {
                    mixer.set_master_volume(volume);
                }
            }
            "music" => {
                if let Some(volume) = parse_volume(argument) {
                    mixer.set_music_volume(volume);
                }
            }
            "category" => match argument.and_then(MusicCategory::from_name) {
                Some(category) => mixer.select_category(category),
                None => {
                    let names: Vec<&str> = MusicCategory::ALL
                        .iter()
                        .map(|c| c.display_name())
                        .collect();
                    println!("Unknown category. Try one of: {}", names.join(", "));
                }
            },
            other => match AmbientSound::from_name(other) {
                Some(sound) => {
                    if let Some(volume) = parse_volume(argument) {
                        mixer.set_ambient_volume(sound, volume);
                    }
                }
                None => println!("Unknown command `{}`. Type `help` for commands.", other),
            },
        }
        Ok(true)
    }

    fn parse_volume(argument: Option<&str>) -> Option<f32> {
        match argument.map(str::parse::<f32>) {
            Some(Ok(volume)) => Some(volume),
            _ => {
                println!("Expected a volume between 0 and 1, e.g. `master 0.8`.");
                None
            }
        }
    }

    fn print_status(mixer: &Mixer) {
        let state = mixer.snapshot();
        println!(
            "transport: {}  master: {:.2}",
            if state.is_playing { "playing" } else { "paused" },
            state.master_volume
        );
        let track = state
            .current_track()
            .map(|t| format!("{} (#{})", t, state.current_track_index + 1))
            .unwrap_or_else(|| "—".to_string());
        let progress = match mixer.music_progress() {
            Some((position, Some(duration))) => {
                format!(" [{:.0}s/{:.0}s]", position.as_secs_f32(), duration.as_secs_f32())
            }
            Some((position, None)) => format!(" [{:.0}s]", position.as_secs_f32()),
            None => String::new(),
        };
        println!(
            "music: {} — {} vol {:.2}{}",
            state.selected_category.display_name(),
            track,
            state.music_volume,
            progress
        );
        for sound in AmbientSound::ALL {
            let live = if mixer.has_ambient_channel(*sound) {
                ""
            } else {
                " (unavailable)"
            };
            println!(
                "{:12} vol {:.2}{}",
                sound.display_name(),
                state.ambient_volume(*sound),
                live
            );
        }
    }

    fn print_help() {
        println!("Commands:");
        println!("  play | pause          toggle the transport");
        println!("  master <0..1>         set master volume");
        println!("  music <0..1>          set music volume");
        println!("  rain|wind|alpha <0..1> set an ambient volume");
        println!("  category <name>       switch music category");
        println!("  next                  skip to the next track");
        println!("  sleep | wake          simulate a power transition");
        println!("  status                show the current mix");
        println!("  quit                  exit");
    }
}

#[cfg(feature = "streaming")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

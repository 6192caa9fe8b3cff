use clap::Parser;

/// Real-time software-rendered animation demo. ESC quits.
#[derive(Parser, Debug, Clone)]
#[command(name = "kinetic-canvas", version)]
pub struct Args {
    /// Window title
    #[arg(long, default_value = "Demo")]
    pub title: String,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Seed for the noise layer and the jittered path (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_demo() {
        let args = Args::try_parse_from(["kinetic-canvas"]).unwrap();
        assert_eq!(args.title, "Demo");
        assert_eq!((args.width, args.height), (1280, 720));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn overrides_parse() {
        let args = Args::try_parse_from([
            "kinetic-canvas", "--width", "640", "--height", "480", "--seed", "17", "--title", "x",
        ])
        .unwrap();
        assert_eq!((args.width, args.height, args.seed), (640, 480, Some(17)));
        assert_eq!(args.title, "x");
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Args::try_parse_from(["kinetic-canvas", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["kinetic-canvas", "--height", "0"]).is_err());
    }
}

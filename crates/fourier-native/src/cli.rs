//! Command-line argument parsing.

use clap::Parser;
use fourier_core::{Control, DemoKind, ShapePreset};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "fourier-native")]
#[command(about = "Fourier series and DFT epicycle demos", long_about = None)]
pub struct Args {
    /// Panel to open: intro, square, sawtooth, draw, shapes, dft, signal, spirograph
    #[arg(long, value_name = "NAME")]
    pub demo: Option<DemoKind>,

    /// Preset outline for the shapes panel (opens that panel unless --demo is given)
    #[arg(long, value_name = "PRESET")]
    pub shape: Option<ShapePreset>,

    /// Epicycle / harmonic count for the opening panel
    #[arg(long, value_name = "N")]
    pub epicycles: Option<usize>,

    /// Animation speed multiplier for the opening panel
    #[arg(long, value_name = "X")]
    pub speed: Option<f64>,

    /// Window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 1200)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 760)]
    pub height: u32,
}

impl Args {
    pub fn initial_demo(&self) -> DemoKind {
        match (self.demo, self.shape) {
            (Some(kind), _) => kind,
            (None, Some(_)) => DemoKind::Presets,
            (None, None) => DemoKind::default(),
        }
    }

    /// Controls to apply to the opening panel before the first frame.
    pub fn startup_controls(&self) -> Vec<Control> {
        let mut controls = Vec::new();
        if let Some(shape) = self.shape {
            controls.push(Control::SelectShape(shape));
        }
        if let Some(n) = self.epicycles {
            controls.push(Control::SetTerms(n));
        }
        if let Some(s) = self.speed {
            controls.push(Control::SetSpeed(s));
        }
        controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("fourier-native").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults_open_the_intro() {
        let args = parse(&[]);
        assert_eq!(args.initial_demo(), DemoKind::Intro);
        assert!(args.startup_controls().is_empty());
        assert_eq!((args.width, args.height), (1200, 760));
    }

    #[test]
    fn shape_implies_the_presets_panel() {
        let args = parse(&["--shape", "heart"]);
        assert_eq!(args.initial_demo(), DemoKind::Presets);
        assert_eq!(
            args.startup_controls(),
            vec![Control::SelectShape(ShapePreset::Heart)]
        );
    }

    #[test]
    fn explicit_demo_wins() {
        let args = parse(&["--demo", "spiro", "--speed", "3", "--epicycles", "40"]);
        assert_eq!(args.initial_demo(), DemoKind::Spirograph);
        assert_eq!(
            args.startup_controls(),
            vec![Control::SetTerms(40), Control::SetSpeed(3.0)]
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let argv = ["fourier-native", "--demo", "mandelbrot"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["fourier-native", "--shape", "gear"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}

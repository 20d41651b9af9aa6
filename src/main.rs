use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use fractal_navigator::{
    ExplorerConfig, FilePresenterPort, NavigationCommand, NavigationController, PpmFilePresenter,
};

/// Renders a Mandelbrot view, applies navigation commands in order and
/// writes the resulting frame as a binary PPM.
#[derive(Debug, Parser)]
#[command(name = "fractal_navigator", version)]
struct Cli {
    /// JSON file with starting constants; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    max_iterations: Option<u32>,

    #[arg(long)]
    zoom: Option<f64>,

    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Also write every intermediate frame into this directory
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// up, down, left, right, reset, in:X,Y or out:X,Y
    commands: Vec<NavigationCommand>,
}

impl Cli {
    fn explorer_config(&self) -> Result<ExplorerConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::load(path)?,
            None => ExplorerConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(zoom) = self.zoom {
            config.initial_zoom = zoom;
        }

        config.validate()?;

        Ok(config)
    }
}

fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{index:04}.ppm"))
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.explorer_config()?;
    let presenter = PpmFilePresenter::new();
    let mut controller = NavigationController::from_config(&config)?;

    info!(
        "rendering {}x{} at {:?}",
        config.width,
        config.height,
        controller.viewport()
    );

    if let Some(dir) = &cli.frames_dir {
        presenter.present(controller.raster(), &frame_path(dir, 0))?;
    }

    for (index, command) in cli.commands.iter().enumerate() {
        controller.dispatch(*command)?;

        if let Some(dir) = &cli.frames_dir {
            presenter.present(controller.raster(), &frame_path(dir, index + 1))?;
        }
    }

    presenter.present(controller.raster(), &cli.output)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    run(&Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fractal_navigator_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_cli_parses_commands_and_overrides() {
        let cli = Cli::try_parse_from([
            "fractal_navigator",
            "--width",
            "32",
            "--max-iterations",
            "20",
            "up",
            "in:16,16",
            "out:4,8",
        ])
        .unwrap();

        let config = cli.explorer_config().unwrap();

        assert_eq!(config.width, 32);
        assert_eq!(config.height, 600);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(cli.commands.len(), 3);
        assert_eq!(cli.commands[0], "up".parse::<NavigationCommand>().unwrap());
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        let result = Cli::try_parse_from(["fractal_navigator", "sideways"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_invalid_zoom_override() {
        let cli = Cli::try_parse_from(["fractal_navigator", "--zoom", "0"]).unwrap();

        assert!(cli.explorer_config().is_err());
    }

    #[test]
    fn test_run_writes_final_and_intermediate_frames() {
        let dir = scratch_dir("run");
        let output = dir.join("final.ppm");
        let frames = dir.join("frames");
        let output_arg = output.to_string_lossy().into_owned();
        let frames_arg = frames.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from([
            "fractal_navigator",
            "--width",
            "16",
            "--height",
            "12",
            "--zoom",
            "4",
            "--output",
            output_arg.as_str(),
            "--frames-dir",
            frames_arg.as_str(),
            "left",
            "in:8,6",
        ])
        .unwrap();

        run(&cli).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"P6\n16 12\n255\n"));
        assert_eq!(bytes.len(), b"P6\n16 12\n255\n".len() + 16 * 12 * 3);
        assert!(frame_path(&frames, 0).exists());
        assert!(frame_path(&frames, 2).exists());
        assert!(!frame_path(&frames, 3).exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}

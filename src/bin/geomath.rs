use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Parser, Subcommand};
    use geomath::{
        Matrix4, Vector3,
        common::{format_angle, to_radians},
        config,
        web_mercator::{ViewportProps, normalize_viewport_props},
    };
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(about = "Vector, matrix and map viewport calculations", long_about = None)]
    struct Cli {
        /// Path to RON file with numeric configuration options to apply first
        #[arg(short, long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Apply the map projection constraints to a viewport
        Viewport {
            #[arg(long)]
            width: f64,
            #[arg(long)]
            height: f64,
            #[arg(long, allow_hyphen_values = true)]
            longitude: f64,
            #[arg(long, allow_hyphen_values = true)]
            latitude: f64,
            #[arg(long, allow_hyphen_values = true)]
            zoom: f64,
            #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
            pitch: f64,
            #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
            bearing: f64,
        },
        /// Compute the angle between two 3-vectors
        Angle {
            /// First vector, as x,y,z
            #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
            a: Vec<f64>,
            /// Second vector, as x,y,z
            #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
            b: Vec<f64>,
        },
        /// Rotate a 3-vector about the z-axis and then translate it
        Transform {
            /// Vector to transform, as x,y,z
            #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
            vector: Vec<f64>,
            /// Translation, as x,y,z
            #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true,
                  default_values_t = [0.0, 0.0, 0.0])]
            translation: Vec<f64>,
            /// Rotation about the z-axis in degrees
            #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
            rotation_z: f64,
            /// Treat the vector as a direction, so that the translation is ignored
            #[arg(long)]
            direction: bool,
        },
        /// Print the active numeric configuration
        Config,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        if let Some(file_path) = &cli.config {
            config::configure_from_ron_file(file_path)?;
        }

        match cli.command {
            Command::Viewport {
                width,
                height,
                longitude,
                latitude,
                zoom,
                pitch,
                bearing,
            } => {
                let props = normalize_viewport_props(ViewportProps {
                    width,
                    height,
                    longitude,
                    latitude,
                    zoom,
                    pitch,
                    bearing,
                });
                println!("{}", to_ron(&props)?);
            }
            Command::Angle { a, b } => {
                let a = Vector3::from_slice(&a)?;
                let b = Vector3::from_slice(&b)?;
                println!("{}", format_angle(a.angle(&b), &config::current()));
            }
            Command::Transform {
                vector,
                translation,
                rotation_z,
                direction,
            } => {
                let mut matrix = Matrix4::from_translation(&Vector3::from_slice(&translation)?);
                matrix.multiply_right(&Matrix4::from_z_rotation(to_radians(rotation_z)))?;

                let mut vector = Vector3::from_slice(&vector)?;
                if direction {
                    vector.transform_as_vector(&matrix)?;
                } else {
                    vector.transform_as_point(&matrix)?;
                }
                println!("{vector}");
            }
            Command::Config => {
                println!("{}", to_ron(&config::current())?);
            }
        }
        Ok(())
    }

    fn to_ron<T: serde::Serialize>(value: &T) -> Result<String> {
        ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
            .context("Failed to serialize output as RON")
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}

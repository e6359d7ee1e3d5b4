use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lecturai::{config::DataArgs, Controller};
use tokio::fs;

#[derive(Parser)]
#[command(name = "lecturai")]
#[command(about = "Manage stored lectures and their generated notes", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored lectures, newest first
    List,

    /// Store a lecture video and generate its notes
    Upload {
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a lecture together with its video
    Delete {
        #[arg(short = 'i', long = "id")]
        id: String,
    },

    /// Write a lecture's notes as a PDF
    Export {
        #[arg(short = 'i', long = "id")]
        id: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn execute_command(controller: &mut Controller, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List => {
            let lectures = controller.lectures();
            if lectures.is_empty() {
                println!("No lectures stored.");
            }
            for lecture in lectures {
                println!(
                    "{}  {}  {:>10}  {}",
                    lecture.id, lecture.date, lecture.file_size, lecture.title
                );
            }
        }
        Commands::Upload { file } => {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .with_context(|| format!("{} has no file name", file.display()))?;
            let data = fs::read(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;

            let lecture = controller.upload(&name, &data).await?;
            println!("Stored {} as {} ({})", lecture.title, lecture.id, lecture.file_size);
        }
        Commands::Delete { id } => match controller.delete(&id).await? {
            Some(lecture) => println!("Deleted {} ({})", lecture.title, lecture.id),
            None => println!("No lecture with id {}", id),
        },
        Commands::Export { id, output } => {
            let export = controller.export(&id).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(&export.file_name));
            fs::write(&path, export.data.as_slice())
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Notes written to {}", path.display());
        }
    }

    Ok(())
}

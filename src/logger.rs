use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf};

pub struct DevLogger {
    file: Option<File>,
    echo: bool,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let file = File::create(dir.join(format!("devlog-{stamp}.txt")))?;
        Ok(Self { file: Some(file), echo: true, color, step, max_logs, counter: 0 })
    }

    // No file, no console; log calls become no-ops. For embedding and tests.
    pub fn silent() -> Self {
        Self { file: None, echo: false, color: false, step: false, max_logs: 0, counter: 0 }
    }

    pub fn is_enabled(&self) -> bool { self.file.is_some() || self.echo }

    pub fn entries(&self) -> usize { self.counter }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        if !self.is_enabled() { return Ok(()); }
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;

        if let Some(f) = self.file.as_mut() {
            let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(f, "[{ts}] #{} {title}\n{details}\n", self.counter)?;
        }

        if self.echo {
            if self.color {
                println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
            } else {
                println!("➤ {title}\n{details}");
            }
        }

        if self.step {
            print!("-- press Enter to continue --");
            use std::io::{self, Write as _};
            io::stdout().flush().ok();
            let mut line = String::new();
            io::stdin().read_line(&mut line).ok();
        }
        Ok(())
    }
}

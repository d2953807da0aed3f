use std::io;
use std::path::Path;

/// Hands files and URLs to the operating system.
pub trait Launcher: Send + Sync {
    fn open_path(&self, path: &Path) -> io::Result<()>;
    fn open_url(&self, url: &str) -> io::Result<()>;
}

pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_path(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

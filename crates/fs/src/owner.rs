use std::{fs, path::Path};

use hashbrown::HashMap;
use log::debug;

/// Maps a numeric user id to a user name.
///
/// Platforms without a user database supply a fixed owner instead.
pub trait OwnerResolver {
    fn resolve(&self, uid: u32) -> Option<String>;
}

/// Unix user database loaded from a passwd(5) file.
#[derive(Debug, Default)]
pub struct PasswdResolver {
    names: HashMap<u32, String>,
}

impl PasswdResolver {
    pub const SYSTEM_DATABASE: &'static str = "/etc/passwd";

    pub fn system() -> Self {
        Self::from_file(Path::new(Self::SYSTEM_DATABASE))
    }

    /// An unreadable database resolves nothing.
    pub fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                debug!("[owner] cannot read {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// `name:passwd:uid:gid:gecos:home:shell`. First entry for a uid wins.
    pub fn parse(contents: &str) -> Self {
        let mut names = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split(':');
            let (Some(name), Some(_), Some(uid)) = (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };

            if name.is_empty() {
                continue;
            }

            if let Ok(uid) = uid.parse::<u32>() {
                names.entry(uid).or_insert_with(|| name.to_owned());
            }
        }

        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl OwnerResolver for PasswdResolver {
    fn resolve(&self, uid: u32) -> Option<String> {
        self.names.get(&uid).cloned()
    }
}

/// Same owner for every entry.
#[derive(Debug, Clone)]
pub struct FixedOwner(pub String);

impl OwnerResolver for FixedOwner {
    fn resolve(&self, _uid: u32) -> Option<String> {
        Some(self.0.clone())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOwners;

impl OwnerResolver for NoOwners {
    fn resolve(&self, _uid: u32) -> Option<String> {
        None
    }
}

/// Platform default resolver.
pub fn system_resolver() -> Box<dyn OwnerResolver> {
    #[cfg(unix)]
    {
        Box::new(PasswdResolver::system())
    }
    #[cfg(not(unix))]
    {
        Box::new(FixedOwner("unknown".to_owned()))
    }
}

#[cfg(unix)]
pub fn entry_uid(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.uid()
}

#[cfg(not(unix))]
pub fn entry_uid(_metadata: &fs::Metadata) -> u32 {
    0
}

#[cfg(unix)]
pub fn entry_mode(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

/// Synthesised POSIX-style mode for platforms without one.
#[cfg(not(unix))]
pub fn entry_mode(metadata: &fs::Metadata) -> u32 {
    if metadata.is_dir() {
        0o40755
    } else if metadata.permissions().readonly() {
        0o100444
    } else {
        0o100644
    }
}

#[cfg(test)]
#[path = "owner_tests.rs"]
mod tests;

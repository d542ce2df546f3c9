use crate::constants::SAVE_VERSION_MAGIC;
use crate::session::SessionState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Manages saving and loading the session record with a checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance
    ///
    /// Sets up the save directory at the appropriate location for the platform
    /// using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "reels").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        let save_path = config_dir.join("save.dat");

        Ok(Self { save_path })
    }

    /// Saves the session to disk with checksum verification
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized session state (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, state: &SessionState) -> io::Result<()> {
        let data = bincode::serialize(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let data_len = data.len() as u32;

        // Compute checksum over version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the session from disk with checksum verification
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The version magic is incorrect
    /// - The checksum verification fails
    /// - The data cannot be deserialized
    pub fn load(&self) -> io::Result<SessionState> {
        let mut file = fs::File::open(&self.save_path)?;

        // Read and verify version magic
        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        // Read data length
        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        // Read data
        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        // Read checksum
        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        // Verify checksum
        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        let state = bincode::deserialize(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(state)
    }

    /// Loads the session, substituting a fresh one when the record is
    /// missing or unreadable. Corruption never propagates to the caller.
    pub fn load_or_default(&self, current_time: i64) -> SessionState {
        match self.load() {
            Ok(state) => state,
            Err(e) => {
                if self.save_exists() {
                    eprintln!("Warning: could not read save file ({}), starting fresh", e);
                }
                SessionState::new(current_time)
            }
        }
    }

    /// Deletes the persisted record (the reset action). Missing files are fine.
    pub fn delete(&self) -> io::Result<()> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

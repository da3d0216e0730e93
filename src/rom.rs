use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, trace};

use crate::constants::{MAX_ROM_SIZE, ROM_START_ADDRESS};
use crate::error::RomError;
use crate::state::State;

/// Reads a whole ROM image from disk without touching any emulator state.
/// Reading stops one byte past `MAX_ROM_SIZE`, so an oversized or endless source is
/// rejected as `TooLarge` without being buffered.
pub fn read_rom(path: &Path) -> Result<Vec<u8>, RomError> {
    trace!("opening ROM file '{}'", path.display());
    let file = File::open(path).map_err(|source| RomError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let file_size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut rom = Vec::new();
    file.take(MAX_ROM_SIZE as u64 + 1)
        .read_to_end(&mut rom)
        .map_err(|source| RomError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    if rom.len() > MAX_ROM_SIZE {
        return Err(RomError::TooLarge {
            size: file_size.max(rom.len()),
            max_size: MAX_ROM_SIZE,
        });
    }
    debug!("ROM size ('{}'): {} bytes", path.display(), rom.len());
    Ok(rom)
}

/// Checks that a ROM is non-empty and fits above `ROM_START_ADDRESS`
pub fn validate(rom: &[u8]) -> Result<(), RomError> {
    if rom.is_empty() {
        return Err(RomError::Empty);
    }
    if rom.len() > MAX_ROM_SIZE {
        return Err(RomError::TooLarge {
            size: rom.len(),
            max_size: MAX_ROM_SIZE,
        });
    }
    Ok(())
}

impl State {
    /// Copies a validated ROM into memory at `ROM_START_ADDRESS`.
    /// Nothing else is reset; the pc already points at the ROM.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), RomError> {
        validate(rom)?;
        let start = ROM_START_ADDRESS as usize;
        self.memory[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }
}

#[cfg(test)]
mod test_rom {
    use super::*;
    use crate::constants::MEMORY_SIZE;

    #[test]
    fn test_loads_at_rom_address() {
        let mut state = State::new();
        state.load_rom(&[0x00, 0xE0, 0x12, 0x00]).unwrap();
        assert_eq!(state.memory[0x200..0x204], [0x00, 0xE0, 0x12, 0x00]);
        assert_eq!(state.memory[0x204], 0x00);
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_rejects_empty() {
        let mut state = State::new();
        assert!(matches!(state.load_rom(&[]), Err(RomError::Empty)));
    }

    #[test]
    fn test_accepts_exact_fit() {
        let mut state = State::new();
        let rom = vec![0xAA; MAX_ROM_SIZE];
        state.load_rom(&rom).unwrap();
        assert_eq!(state.memory[MEMORY_SIZE - 1], 0xAA);
    }

    #[test]
    fn test_rejects_oversized_without_writing() {
        let mut state = State::new();
        let rom = vec![0xAA; MAX_ROM_SIZE + 1];
        match state.load_rom(&rom) {
            Err(RomError::TooLarge { size, max_size }) => {
                assert_eq!(size, 3585);
                assert_eq!(max_size, 3584);
            }
            _ => panic!("expected TooLarge"),
        }
        assert!(state.memory[0x200..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("chip8vm-test-rom-does-not-exist.ch8");
        assert!(matches!(read_rom(&path), Err(RomError::Open { .. })));
    }

    fn temp_rom(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let file = format!("chip8vm-test-{}-{}.ch8", name, std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_read_file_bytes() {
        let path = temp_rom("read", &[0x60, 0x0A, 0x70, 0x01]);
        let rom = read_rom(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(rom, vec![0x60, 0x0A, 0x70, 0x01]);
    }

    #[test]
    fn test_read_oversized_file_is_too_large() {
        let path = temp_rom("oversized", &vec![0xAA; MAX_ROM_SIZE + 100]);
        let result = read_rom(&path);
        std::fs::remove_file(&path).unwrap();
        match result {
            Err(RomError::TooLarge { size, max_size }) => {
                assert_eq!(size, MAX_ROM_SIZE + 100);
                assert_eq!(max_size, MAX_ROM_SIZE);
            }
            _ => panic!("expected TooLarge"),
        }
    }

    #[test]
    fn test_read_exact_fit_file() {
        let path = temp_rom("exact", &vec![0xAA; MAX_ROM_SIZE]);
        let rom = read_rom(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(rom.len(), MAX_ROM_SIZE);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_endless_source_stops_at_limit() {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(read_rom(Path::new("/dev/zero")));
        });
        let result = rx
            .recv_timeout(std::time::Duration::from_secs(3))
            .expect("read_rom(/dev/zero) returned");
        assert!(matches!(result, Err(RomError::TooLarge { .. })));
    }
}

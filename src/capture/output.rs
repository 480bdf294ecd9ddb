use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes the decoded packet to a file as a raw binary blob.
pub fn write_packet(path: &Path, packet: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(packet)
}

/// Renders each packet byte as a binary/hex line for the console.
pub fn render_packet(packet: &[u8]) -> String {
    packet
        .iter()
        .map(|byte| format!(" |-----[{byte:08b}]  |  0x{byte:02x}"))
        .collect::<Vec<_>>()
        .join("\n")
}

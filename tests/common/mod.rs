#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";
pub const GIF_BYTES: &[u8] = b"GIF89a\x01\0\x01\0\x80\0\0";

pub fn pastepad_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pastepad").unwrap();
    cmd.env_remove("PASTEPAD_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `pastepad init` on `dir`
pub fn init_pad(dir: &Path) {
    pastepad_cmd().arg("init").arg(dir).assert().success();
}

/// Run `pastepad add <text>` inside `dir`
pub fn add_note(dir: &Path, text: &str) {
    pastepad_cmd()
        .current_dir(dir)
        .arg("add")
        .arg(text)
        .assert()
        .success();
}

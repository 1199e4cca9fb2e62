//! Renders man pages and shell completions for `frontdesk` into `OUT_DIR`
//! for packagers. `frontdesk completions <SHELL>` prints the same scripts
//! at runtime.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

// cli.rs only depends on clap + clap_complete (both build-dependencies)
#[path = "src/cli.rs"]
mod cli;

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR")
        .ok_or_else(|| io::Error::other("OUT_DIR not set by Cargo"))?;
    let out_dir = Path::new(&out_dir);

    let mut cmd = cli::Cli::command();

    let man_dir = out_dir.join("man");
    std::fs::create_dir_all(&man_dir)?;
    write_manpages(&cmd, "", &man_dir)?;

    let completion_dir = out_dir.join("completions");
    std::fs::create_dir_all(&completion_dir)?;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        clap_complete::generate_to(shell, &mut cmd, "frontdesk", &completion_dir)?;
    }
    Ok(())
}

/// One page per visible command: `frontdesk.1`, `frontdesk-rooms.1`,
/// `frontdesk-rooms-add.1`, and so on.
fn write_manpages(cmd: &clap::Command, parent: &str, dir: &Path) -> io::Result<()> {
    let name = if parent.is_empty() {
        cmd.get_name().to_owned()
    } else {
        format!("{parent}-{}", cmd.get_name())
    };

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone().name(name.clone())).render(&mut page)?;
    std::fs::write(dir.join(format!("{name}.1")), page)?;

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        write_manpages(sub, &name, dir)?;
    }
    Ok(())
}

/// Rebuild when a bundled install script changes.
///
/// `include_dir!()` embeds `assets/` at compile time but does not tell cargo
/// about the files it read.
fn main() {
    println!("cargo::rerun-if-changed=assets");
}

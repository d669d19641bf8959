/// Entry point for the course catalog server
///
/// This is a thin wrapper that delegates to the library crate.
/// All modules and server setup live in lib.rs.
fn main() -> anyhow::Result<()> {
    catalog_lib::run()
}

// Entrypoint for the CD inventory CLI.
// - Keeps `main` small: set up logging, pick the data file and hand over to
//   the menu loop.
// - Inventory errors are handled inside the loop; only a broken terminal
//   makes `main` return an error.

use cd_inventory::{logging, ui::main_menu, Config};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, quiet unless RUST_LOG asks for more.
    logging::init();

    let config = Config::default();

    // Blocks until the user picks [x].
    main_menu(&config)?;
    Ok(())
}

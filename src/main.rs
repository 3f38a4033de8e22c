use clap::Parser;
use pastepad::application::manage_config::ConfigService;
use pastepad::application::{init::init, AddNoteService, ExportService, NoteInput, NoteStore, PasteCapture};
use pastepad::cli::{format_export_report, format_image_list, format_note_list, Cli, Commands};
use pastepad::error::PastepadError;
use pastepad::infrastructure::{DirectoryDownloader, FileStorage, PasteEvent};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PastepadError> {
    let Some(command) = cli.command else {
        println!("pastepad - Terminal notepad for text notes and pasted images");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => init(&path),
        Commands::Add { text, stdin } => {
            let storage = FileStorage::discover()?;
            let config = storage.load_config()?;
            let store = NoteStore::load(storage)?;

            let input = if stdin {
                NoteInput::Stdin
            } else if text.is_empty() {
                NoteInput::Editor
            } else {
                NoteInput::Words(text)
            };

            let mut service = AddNoteService::new(store, config.get_editor());
            if service.execute(input)? {
                println!("Added note {}", service.store().notes().len());
            } else {
                println!("Nothing to add");
            }
            Ok(())
        }
        Commands::Delete { position } => {
            let mut store = NoteStore::load(FileStorage::discover()?)?;
            let removed = match position.checked_sub(1) {
                Some(index) => store.delete_note(index)?,
                None => None,
            };
            match removed {
                Some(note) => {
                    println!("Deleted note {}: {}", position, note.lines().next().unwrap_or(""));
                    Ok(())
                }
                None => Err(PastepadError::NoteNotFound(position)),
            }
        }
        Commands::List => {
            let store = NoteStore::load(FileStorage::discover()?)?;
            println!("{}", format_note_list(store.notes()).trim_end());
            Ok(())
        }
        Commands::Paste { sources } => {
            let mut store = NoteStore::load(FileStorage::discover()?)?;
            let event = PasteEvent::from_sources(&sources)?;
            let captured = PasteCapture::attach(&mut store).handle(&event)?;
            let ignored = event.items.len() - captured;
            if ignored > 0 {
                println!(
                    "Pasted {} image(s), ignored {} non-image item(s)",
                    captured, ignored
                );
            } else {
                println!("Pasted {} image(s)", captured);
            }
            Ok(())
        }
        Commands::Images => {
            let store = NoteStore::load(FileStorage::discover()?)?;
            println!("{}", format_image_list(store.images()).trim_end());
            Ok(())
        }
        Commands::Save { out } => {
            let storage = FileStorage::discover()?;
            let config = storage.load_config()?;
            let dir = out.unwrap_or_else(|| config.export_path(storage.root()));
            let store = NoteStore::load(storage)?;

            let mut downloader = DirectoryDownloader::new(dir);
            let report =
                ExportService::from_config(&config).export_all(store.notebook(), &mut downloader)?;
            print!("{}", format_export_report(&report, downloader.dir()));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileStorage::discover()?);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("export_dir = {}", config.export_dir);
                println!("image_naming = {}", config.image_naming);
                println!("on_corrupt_image = {}", config.on_corrupt_image);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: pastepad config [--list | <key> [<value>]]");
                println!("Valid keys: editor, export_dir, image_naming, on_corrupt_image, created");
                Ok(())
            }
        }
    }
}

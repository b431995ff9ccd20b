use blogpad::application::{
    init::init, list_posts, show_post, ContentSource, SavePostRequest, SavePostService,
};
use blogpad::cli::{format_post, format_post_list, Cli, Commands};
use blogpad::domain::FileName;
use blogpad::error::BlogpadError;
use blogpad::infrastructure::{telemetry, Config, PostCodec, PostRepository};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init() {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BlogpadError> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(&cwd, cli.config.as_deref(), cli.overrides())?;

    match cli.command {
        Commands::Init => {
            let dir = init(&config)?;
            println!("Initialized post storage at {}", dir.display());
            Ok(())
        }
        Commands::Save {
            title,
            content,
            content_file,
            fields,
        } => {
            let content = match content_file {
                Some(path) => ContentSource::File(path),
                None => ContentSource::Inline(content.unwrap_or_default()),
            };

            let service = SavePostService::new(PostRepository::from_config(&config)?);
            let file_name = service.execute(SavePostRequest {
                title,
                content,
                fields,
            })?;
            println!("{}", file_name);
            Ok(())
        }
        Commands::Import { path } => {
            let service = SavePostService::new(PostRepository::from_config(&config)?);
            let file_name = service.import(&path)?;
            println!("{}", file_name);
            Ok(())
        }
        Commands::Show {
            key,
            file_name,
            json,
        } => {
            let repo = PostRepository::from_config(&config)?;
            let post = show_post(&repo, &key, file_name)?;
            if json {
                let path = repo
                    .directory()
                    .join(FileName::from_title(&post.title)?.as_str());
                let text = PostCodec::new(config.pretty)
                    .encode(&post)
                    .map_err(|e| BlogpadError::format(path, e))?;
                println!("{}", text);
            } else {
                println!("{}", format_post(&post));
            }
            Ok(())
        }
        Commands::List { limit } => {
            let repo = PostRepository::from_config(&config)?;
            let posts = list_posts(&repo, limit)?;
            print!("{}", format_post_list(&posts));
            if posts.is_empty() {
                println!();
            }
            Ok(())
        }
    }
}

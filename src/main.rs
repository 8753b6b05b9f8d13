use anyhow::{anyhow, Result};
use draftly::catalog::RoleOrigin;
use draftly::generate::GenerationInput;
use draftly::{commands, AppState, KeyringTokenStore, Settings};
use std::env;
use std::sync::Arc;
use uuid::Uuid;

fn usage() -> ! {
    eprintln!(
        "Usage: draftly <command> [args]\n\n\
         Commands:\n\
         \x20 login <email> <password>\n\
         \x20 register <email> <password> [full_name]\n\
         \x20 logout\n\
         \x20 whoami\n\
         \x20 roles\n\
         \x20 models\n\
         \x20 generate <role-id> <model> <topic> [length] [keywords] [goal]\n\
         \x20 articles\n\
         \x20 article <id>\n\
         \x20 delete-article <id>\n\
         \x20 analyze <text>"
    );
    std::process::exit(2);
}

fn arg(args: &[String], index: usize) -> String {
    args.get(index).cloned().unwrap_or_else(|| usage())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::from_env();
    let tokens = Arc::new(KeyringTokenStore::new()?);
    let state = AppState::new(&settings, tokens);

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or_else(|| usage());

    match command {
        "login" => {
            commands::login(&state, &arg(&args, 1), &arg(&args, 2))
                .await
                .map_err(|e| anyhow!(e))?;
            println!("Logged in.");
        }
        "register" => {
            let full_name = args.get(3).cloned().unwrap_or_default();
            let user = commands::register(&state, &arg(&args, 1), &arg(&args, 2), &full_name)
                .await
                .map_err(|e| anyhow!(e))?;
            println!("Registered {}.", user.email);
        }
        "logout" => {
            commands::logout(&state).map_err(|e| anyhow!(e))?;
            println!("Logged out.");
        }
        "whoami" => {
            let user = commands::current_user(&state).await.map_err(|e| anyhow!(e))?;
            println!("{} <{}>", user.full_name.unwrap_or_default(), user.email);
        }
        "roles" => {
            let catalog = commands::load_roles(&state).await.map_err(|e| anyhow!(e))?;
            for role in catalog.roles() {
                let tag = match catalog.origin(role.id) {
                    Some(RoleOrigin::Global) => "global",
                    _ => "personal",
                };
                println!("{}  [{}]  {}", role.id, tag, role.name);
            }
        }
        "models" => {
            for model in commands::active_models(&state).await.map_err(|e| anyhow!(e))? {
                println!("{}", model);
            }
        }
        "generate" => {
            let role_id: Uuid = arg(&args, 1).parse()?;
            let catalog = commands::load_roles(&state).await.map_err(|e| anyhow!(e))?;
            let input = GenerationInput {
                role_id: Some(role_id),
                model: arg(&args, 2),
                topic: arg(&args, 3),
                length: args.get(4).cloned().unwrap_or_else(|| "4096".to_string()),
                keywords: args.get(5).cloned().unwrap_or_default(),
                goal: args.get(6).cloned().unwrap_or_default(),
            };
            println!("Generating, this can take up to a minute...");
            let id = commands::generate_article(&state, &catalog, &input)
                .await
                .map_err(|e| anyhow!(e))?;
            println!("Article {} is ready.", id);
        }
        "articles" => {
            let page = commands::list_articles(&state).await.map_err(|e| anyhow!(e))?;
            for article in &page.data {
                println!("{}  {}", article.id, article.name);
            }
            println!("({} total)", page.count);
        }
        "article" => {
            let id: i64 = arg(&args, 1).parse()?;
            let article = commands::get_article(&state, id).await.map_err(|e| anyhow!(e))?;
            println!("# {}\n\n{}", article.name, article.content);
        }
        "delete-article" => {
            let id: i64 = arg(&args, 1).parse()?;
            commands::delete_article(&state, id).await.map_err(|e| anyhow!(e))?;
            println!("Deleted article {}.", id);
        }
        "analyze" => {
            let report = commands::analyze_text(&state, &arg(&args, 1))
                .await
                .map_err(|e| anyhow!(e))?;
            println!(
                "{} characters, {} words",
                report.statistics.num_characters, report.statistics.num_words
            );
            for kw in &report.keywords {
                println!("{:>5}  {}", kw.count, kw.word);
            }
        }
        _ => usage(),
    }

    Ok(())
}

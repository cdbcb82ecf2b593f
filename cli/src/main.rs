use alblearn::client::auth::LoginPayload;
use alblearn::client::modules::ListModulesParams;
use alblearn::client::sections::ListSectionsParams;
use alblearn::dashboard::{DashboardInsights, recent_modules, sort_modules_oldest_first};
use alblearn::error::{AppResult, run_with_error_handler};
use alblearn::lesson::LessonStepType;
use alblearn::model::User;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "CLI for browsing the AlbLearn platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// Browse modules
    Modules {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Inspect module sections
    Sections {
        #[command(subcommand)]
        action: SectionCommands,
    },

    /// Render the student dashboard insights
    Dashboard,
}

#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    List {
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        per_page: Option<i64>,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        slug: String,
    },
    Enroll {
        slug: String,
    },
    Statistics {
        slug: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectionCommands {
    /// Print a section's lesson steps in presentation order
    Show {
        module_slug: String,
        section_id: String,
    },
}

#[tokio::main]
async fn main() {
    alblearn::setup_trace();
    run_with_error_handler(run).await;
}

async fn run() -> AppResult<()> {
    let args = Cli::parse();
    let client = alblearn::build_client().await?;

    match args.command {
        Commands::Login { email, password } => {
            let response = client
                .auth()
                .login(&LoginPayload { email, password })
                .await?;
            let user = User::from(response.data.user);
            println!("Logged in as {} ({})", user.full_name(), user.role);
        }

        Commands::Logout => {
            client.auth().logout().await?;
            println!("Logged out.");
        }

        Commands::Whoami => {
            let response = client.auth().me().await?;
            let user = User::from(response.data);
            println!("{} <{}> — {}", user.full_name(), user.email, user.role);
        }

        Commands::Modules { action } => run_modules(&client, action).await?,

        Commands::Sections { action } => match action {
            SectionCommands::Show {
                module_slug,
                section_id,
            } => {
                let response = client.sections().get(&module_slug, &section_id).await?;
                let section = response.data;
                println!("# {}", section.title);

                for (index, step) in section.resolved_steps().iter().enumerate() {
                    println!();
                    println!("## Step {}: {} [{}]", index + 1, step.title, step.kind);
                    if step.kind == LessonStepType::Media {
                        if let Some(url) = &step.media_url {
                            println!("media: {url}");
                        }
                    }
                    if !step.content.is_empty() {
                        println!("{}", step.content);
                    }
                }
            }
        },

        Commands::Dashboard => {
            let config = alblearn::Config::get_or_init(cfg!(debug_assertions)).await;
            let insights = DashboardInsights::load(&client, config.app().learning_path()).await;

            match insights.total_points() {
                Some(points) => println!("Total points: {points}"),
                None => println!("Total points: —"),
            }
            println!("Achievements: {}", insights.achievements().len());
            println!(
                "Unlocked achievements: {}",
                insights.unlocked_achievement_items().len()
            );

            match insights.progress_stats() {
                Some(stats) => println!("Progress stats: {stats}"),
                None => println!("Progress stats: —"),
            }
            match insights.leaderboard() {
                Some(board) => println!("Leaderboard: {board}"),
                None => println!("Leaderboard: —"),
            }

            if config.app().learning_path() {
                println!("Learning path: {} modules", insights.learning_path().len());
                println!(
                    "Accessible: {} / locked: {}",
                    insights.accessible_modules().len(),
                    insights.locked_modules().len()
                );
            }
        }
    }

    Ok(())
}

async fn run_modules(client: &alblearn::client::ApiClient, action: ModuleCommands) -> AppResult<()> {
    match action {
        ModuleCommands::List {
            page,
            per_page,
            search,
        } => {
            let response = client
                .modules()
                .list_published(&ListModulesParams {
                    page,
                    per_page,
                    search,
                    ..Default::default()
                })
                .await?;

            let mut modules = response.data.data;
            sort_modules_oldest_first(&mut modules);
            for module in &modules {
                println!("{:<30} {}", module.slug, module.title);
            }
            println!(
                "-- page {}/{} ({} total)",
                response.data.meta.current_page, response.data.meta.last_page, response.data.meta.total
            );

            let newest: Vec<&str> = recent_modules(&modules, 4)
                .into_iter()
                .map(|m| m.slug.as_str())
                .collect();
            if !newest.is_empty() {
                println!("newest: {}", newest.join(", "));
            }
        }

        ModuleCommands::Show { slug } => {
            let response = client.modules().get_by_slug(&slug).await?;
            let module = response.data;
            println!("{} ({})", module.title, module.status);
            if let Some(description) = &module.description {
                println!("{description}");
            }

            let sections = client
                .sections()
                .list(&slug, &ListSectionsParams::default())
                .await?;
            for section in &sections.data {
                println!(
                    "  [{}] {} — {} steps",
                    section.id,
                    section.title,
                    section.resolved_steps().len()
                );
            }
        }

        ModuleCommands::Enroll { slug } => {
            let response = client.modules().enroll(&slug).await?;
            println!("Enrolled: {}", response.data.status);
        }

        ModuleCommands::Statistics { slug } => {
            let response = client.modules().statistics(&slug).await?;
            let stats = response.data;
            println!("enrollments: {}", stats.total_enrollments);
            println!("active learners: {}", stats.active_learners);
            println!("completion rate: {}%", stats.completion_rate);
            println!("average progress: {}%", stats.average_progress);
        }
    }

    Ok(())
}

use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lingo::model::entity::{
    Course,
    CourseCreate,
    Exercise,
    ExerciseCreate,
    ExerciseKind,
    Lesson,
    LessonCreate,
    User,
    UserCreate,
};
use lingo::model::{DocumentRepository, ModelManager, MongoStore, seed_demo};
use mongodb::bson::doc;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for managing language-learning content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Manage exercises
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommands,
    },

    /// Load the demo fixture
    Seed,
}

/// User management
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: Option<String>,
    },
}

/// Course management
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "en")]
        base_language: String,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        /// Course code to attach the lesson to
        #[arg(long)]
        course_code: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        order: u32,
    },
}

/// Exercise management
#[derive(Subcommand, Debug)]
pub enum ExerciseCommands {
    Add {
        /// Lesson title to attach the exercise to
        #[arg(long)]
        lesson_title: String,
        /// "mcq" or "translate"
        #[arg(long)]
        r#type: String,
        #[arg(long)]
        prompt: String,
        /// Repeatable; mcq choices
        #[arg(long)]
        option: Vec<String>,
        #[arg(long)]
        answer: String,
    },
}

#[tokio::main]
async fn main() -> lingo::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let config = lingo::Config::from_env()?;
    let store = MongoStore::connect(config.database_url(), config.database_name()).await?;
    let mm = ModelManager::new(Arc::new(store));

    match args.command {
        Commands::User { action } => match action {
            UserCommands::Add { username, name } => {
                let user = User::create(&mm, UserCreate { username, name }).await?;
                println!("User created: {:?}", user);
            }
        },

        Commands::Course { action } => match action {
            CourseCommands::Add { name, code, base_language } => {
                let course = Course::create(
                    &mm,
                    CourseCreate {
                        name,
                        code,
                        base_language,
                    },
                )
                .await?;
                println!("Course created: {:?}", course);
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add { course_code, title, order } => {
                let course = Course::find_by_code(&mm, &course_code).await?;
                let Some(course) = course else {
                    eprintln!("No course with code {:?}", course_code);
                    std::process::exit(1);
                };
                let Some(course_id) = course.id() else {
                    eprintln!("Course {:?} has no id", course_code);
                    std::process::exit(1);
                };

                let lesson = Lesson::create(
                    &mm,
                    LessonCreate {
                        course_id: course_id.to_hex(),
                        title,
                        order,
                    },
                )
                .await?;
                println!("Lesson created: {:?}", lesson);
            }
        },

        Commands::Exercise { action } => match action {
            ExerciseCommands::Add { lesson_title, r#type, prompt, option, answer } => {
                let Ok(kind) = ExerciseKind::from_str(&r#type) else {
                    eprintln!("Invalid exercise type {:?}, expected mcq or translate", r#type);
                    std::process::exit(1);
                };

                let lesson = Lesson::find_one(&mm, doc! { "title": &lesson_title }).await?;
                let Some(lesson_id) = lesson.and_then(|l| l.id()) else {
                    eprintln!("No lesson titled {:?}", lesson_title);
                    std::process::exit(1);
                };

                let exercise = Exercise::create(
                    &mm,
                    ExerciseCreate {
                        lesson_id: lesson_id.to_hex(),
                        kind,
                        prompt,
                        options: if option.is_empty() { None } else { Some(option) },
                        answer,
                    },
                )
                .await?;
                println!("Exercise created: {:?}", exercise);
            }
        },

        Commands::Seed => {
            let seed = seed_demo(&mm).await?;
            println!("Demo fixture ready: {:?}", seed);
        }
    }

    Ok(())
}

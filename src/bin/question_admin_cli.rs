use env_logger::Env;
use log::error;
use question_admin::QuestionAdmin;
use question_admin::config::AdminConfig;
use question_admin::draft::{DraftField, OptionField};
use question_admin::model::{Difficulty, QuestionType};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage:
  question_admin_cli list
  question_admin_cli delete <id>
  question_admin_cli add-fill <content> <answer> [easy|medium|hard]
  question_admin_cli add-choice <content> <option>... (prefix the correct ones with *)";

fn parse_difficulty(raw: Option<&String>) -> Result<Difficulty, String> {
    match raw.map(|s| s.as_str()) {
        None | Some("easy") => Ok(Difficulty::Easy),
        Some("medium") => Ok(Difficulty::Medium),
        Some("hard") => Ok(Difficulty::Hard),
        Some(other) => Err(format!("unknown difficulty `{other}`")),
    }
}

/// Runs whatever was dispatched and reports the outcome.
fn settle(admin: &mut QuestionAdmin) -> Result<(), String> {
    admin.wait();
    if let Some(failure) = admin.last_failure() {
        return Err(failure.to_string());
    }
    if !admin.message.is_empty() {
        println!("{}", admin.message);
    }
    Ok(())
}

fn print_questions(admin: &QuestionAdmin) {
    for row in admin.question_rows() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            row.id,
            row.type_label,
            row.difficulty_label,
            row.content_preview(60),
            row.detail
        );
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = AdminConfig::load().map_err(|e| e.to_string())?;
    let mut admin = QuestionAdmin::from_config(&config);

    admin.refresh().map_err(|e| e.to_string())?;
    settle(&mut admin)?;

    match args.first().map(|s| s.as_str()) {
        Some("list") => {}
        Some("delete") => {
            let id = args.get(1).ok_or(USAGE)?;
            admin.request_delete(id).map_err(|e| e.to_string())?;
            admin.confirm_delete().map_err(|e| e.to_string())?;
            settle(&mut admin)?;
        }
        Some("add-fill") => {
            let content = args.get(1).ok_or(USAGE)?;
            let answer = args.get(2).ok_or(USAGE)?;
            let difficulty = parse_difficulty(args.get(3))?;

            admin.open_add().map_err(|e| e.to_string())?;
            for field in [
                DraftField::Type(QuestionType::FillInTheBlank),
                DraftField::Content(content.clone()),
                DraftField::CorrectAnswer(answer.clone()),
                DraftField::Difficulty(difficulty),
            ] {
                admin.set_field(field).map_err(|e| e.to_string())?;
            }
            admin.save().map_err(|e| e.to_string())?;
            settle(&mut admin)?;
        }
        Some("add-choice") => {
            let content = args.get(1).ok_or(USAGE)?;
            let options = &args[2..];
            if options.is_empty() {
                return Err(USAGE.into());
            }

            admin.open_add().map_err(|e| e.to_string())?;
            admin
                .set_field(DraftField::Content(content.clone()))
                .map_err(|e| e.to_string())?;
            for (i, raw) in options.iter().enumerate() {
                let (text, correct) = match raw.strip_prefix('*') {
                    Some(text) => (text, true),
                    None => (raw.as_str(), false),
                };
                admin.add_option().map_err(|e| e.to_string())?;
                admin
                    .set_option(i, OptionField::Text(text.to_string()))
                    .map_err(|e| e.to_string())?;
                admin
                    .set_option(i, OptionField::Correct(correct))
                    .map_err(|e| e.to_string())?;
            }
            admin.save().map_err(|e| e.to_string())?;
            settle(&mut admin)?;
        }
        _ => return Err(USAGE.into()),
    }

    print_questions(&admin);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

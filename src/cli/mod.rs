use anyhow::Result;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::application::RosterService;
use crate::domain::{format_cents, parse_cents, PaymentOutcome};

/// Bursar - Student Tuition Ledger
#[derive(Parser)]
#[command(name = "bursar")]
#[command(about = "An interactive tuition ledger for a student roster")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum MenuAction {
    AddStudent,
    EnrollStudent,
    ViewBalance,
    PayTuition,
    ShowStatus,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::AddStudent,
        MenuAction::EnrollStudent,
        MenuAction::ViewBalance,
        MenuAction::PayTuition,
        MenuAction::ShowStatus,
        MenuAction::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::AddStudent => "Add Student",
            MenuAction::EnrollStudent => "Enroll Student",
            MenuAction::ViewBalance => "View Balance",
            MenuAction::PayTuition => "Pay Tuition",
            MenuAction::ShowStatus => "Show Status",
            MenuAction::Exit => "Exit",
        }
    }
}

impl Cli {
    /// Run the interactive session: one menu selection, one service call,
    /// one rendered result, until the user exits. Domain failures are
    /// rendered as messages and never abort the loop.
    pub fn run(self) -> Result<()> {
        let mut service = RosterService::new();
        let theme = ColorfulTheme::default();
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

        loop {
            let choice = Select::with_theme(&theme)
                .with_prompt("Choose an action")
                .items(&labels)
                .default(0)
                .interact()?;

            match MenuAction::ALL[choice] {
                MenuAction::AddStudent => add_student(&theme, &mut service)?,
                MenuAction::EnrollStudent => enroll_student(&theme, &mut service)?,
                MenuAction::ViewBalance => view_balance(&theme, &service)?,
                MenuAction::PayTuition => pay_tuition(&theme, &mut service)?,
                MenuAction::ShowStatus => show_status(&theme, &service)?,
                MenuAction::Exit => break,
            }
        }

        Ok(())
    }
}

fn prompt_student_id(theme: &ColorfulTheme) -> Result<String> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Student id")
        .interact_text()?;
    Ok(id)
}

fn add_student(theme: &ColorfulTheme, service: &mut RosterService) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Student name")
        .allow_empty(true)
        .interact_text()?;

    let student = service.create_student(name);
    println!("Added student: {} (id {})", student.name, student.id);
    Ok(())
}

fn enroll_student(theme: &ColorfulTheme, service: &mut RosterService) -> Result<()> {
    let id = prompt_student_id(theme)?;
    let course: String = Input::with_theme(theme)
        .with_prompt("Course to enroll")
        .interact_text()?;

    match service.enroll(&id, course) {
        Ok(result) => println!(
            "Enrolled {} in {}. Tuition due is now {}.",
            result.student_name,
            result.course,
            format_cents(result.balance)
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn view_balance(theme: &ColorfulTheme, service: &RosterService) -> Result<()> {
    let id = prompt_student_id(theme)?;

    match service.get_balance(&id) {
        Ok(balance) => println!("Balance for student {}: {}", id, format_cents(balance)),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn pay_tuition(theme: &ColorfulTheme, service: &mut RosterService) -> Result<()> {
    let id = prompt_student_id(theme)?;
    let amount_input: String = Input::with_theme(theme)
        .with_prompt("Amount to pay")
        .validate_with(|input: &String| parse_cents(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    let amount = parse_cents(&amount_input)?;

    match service.pay_tuition(&id, amount) {
        Ok(PaymentOutcome::Paid { new_balance }) => println!(
            "Paid {}. New balance is {}.",
            format_cents(amount),
            format_cents(new_balance)
        ),
        Ok(PaymentOutcome::Rejected { balance }) => println!(
            "Cannot pay {}. The balance is only {}.",
            format_cents(amount),
            format_cents(balance)
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn show_status(theme: &ColorfulTheme, service: &RosterService) -> Result<()> {
    let id = prompt_student_id(theme)?;

    match service.get_status(&id) {
        Ok(status) => {
            println!("Student: {}", status.name);
            println!("  ID:       {}", status.id);
            if status.courses.is_empty() {
                println!("  Courses:  (none)");
            } else {
                println!("  Courses:  {}", status.courses.join(", "));
            }
            println!("  Balance:  {}", format_cents(status.balance));
            println!(
                "  Added:    {}",
                status.created_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

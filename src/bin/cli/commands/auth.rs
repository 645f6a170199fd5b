use anyhow::{bail, Result};

use flashq_lib::view::{Command, LoginForm, Outcome, Page, SignupForm};

use crate::app::App;

pub fn run_login(app: &App, form: LoginForm) -> Result<()> {
    let mut view = app.controller(Page::Login);
    let outcome = view.dispatch(Command::SubmitLogin(form))?;
    report(outcome)
}

pub fn run_signup(app: &App, form: SignupForm) -> Result<()> {
    let mut view = app.controller(Page::Signup);
    let outcome = view.dispatch(Command::SubmitSignup(form))?;
    report(outcome)
}

fn report(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Redirect { to, notice } => {
            if let Some(notice) = notice {
                println!("{}", notice);
            }
            println!("-> {}", to);
            Ok(())
        }
        Outcome::Rejected(message) => bail!(message),
        other => bail!("Unexpected outcome: {:?}", other),
    }
}

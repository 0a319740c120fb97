use clap::Parser;
use tracing::{info, warn};
use user_roster::config::Config;
use user_roster::lifecycle::{setup_tracing, Outcome, UserSession};
use user_roster::model::DraftField;
use user_roster::remote::{HttpUserClient, UserApi};

#[tokio::main]
async fn main() -> Result<(), user_roster::Error> {
    setup_tracing();

    let config = Config::parse();
    info!(base_url = %config.base_url, "Starting user roster");

    let mut session = UserSession::new(HttpUserClient::new(&config)?);

    session.load().await?;
    print_roster(&session);

    if config.walkthrough {
        walkthrough(&mut session).await?;
    }
    Ok(())
}

/// Create, edit, then delete one user, printing the roster after each step.
async fn walkthrough<A: UserApi>(session: &mut UserSession<A>) -> Result<(), user_roster::Error> {
    session.start_create();
    session.update_field(DraftField::FirstName, "Bob");
    session.update_field(DraftField::LastName, "Lee");
    session.update_field(DraftField::Email, "bob.lee@example.com");
    session.update_field(DraftField::Department, "Engineering");
    if session.submit().await? == Outcome::Failed {
        print_roster(session);
        return Ok(());
    }
    print_roster(session);

    let Some(created) = session.records().iter().last().map(|user| user.id) else {
        warn!("Created user is not in the roster");
        return Ok(());
    };

    session.select_for_edit(created)?;
    session.update_field(DraftField::Email, "bob@example.com");
    session.submit().await?;
    print_roster(session);

    session.delete(created).await?;
    print_roster(session);
    Ok(())
}

fn print_roster<A: UserApi>(session: &UserSession<A>) {
    if let Some(message) = session.errors().message() {
        println!("{message}");
    }
    for user in session.records().iter() {
        println!(
            "{:>4}  {:<28}  {:<32}  {}",
            user.id.0,
            user.display_name(),
            user.email,
            user.department_label()
        );
    }
    println!();
}

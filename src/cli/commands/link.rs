use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, LinkCmd};
use crate::config::Config;
use crate::db::{links, log};
use crate::errors::AppResult;
use crate::models::InterviewContact;
use crate::ui::messages::{success, warning};
use crate::utils::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Link { action } = cmd {
        let pool = open_session(cfg)?;

        match action {
            LinkCmd::Add {
                interview_id,
                contact_id,
            } => {
                let created =
                    links::insert(&pool.conn, &InterviewContact::new(*interview_id, *contact_id))?;
                log::oplog(
                    &pool.conn,
                    "link.add",
                    &format!("{interview_id}->{contact_id}"),
                    &format!("Link {} created", created.interview_contact_id),
                )
                .ok();
                success(format!(
                    "Interview {} linked to contact {} (id {})",
                    interview_id, contact_id, created.interview_contact_id
                ));
            }

            LinkCmd::List => {
                let set = links::listing(&pool.conn)?;
                print!("{}", render(&set, &cfg.separator_char));
            }

            LinkCmd::Del { id } => {
                let affected = links::delete(&pool.conn, *id)?;
                if affected == 0 {
                    warning(format!("No link with id {id}"));
                } else {
                    success(format!("Link {id} deleted"));
                }
            }
        }
    }
    Ok(())
}

use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, InterviewCmd};
use crate::config::Config;
use crate::db::{interviews, log};
use crate::errors::AppResult;
use crate::models::Interview;
use crate::ui::messages::{success, warning};
use crate::utils::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Interview { action } = cmd {
        let pool = open_session(cfg)?;

        match action {
            InterviewCmd::Add {
                role_id,
                date,
                start,
                end,
                notes,
                kind,
            } => {
                let interview = Interview {
                    interview_id: 0,
                    role_id: *role_id,
                    date: date.clone(),
                    start: start.clone(),
                    end: end.clone(),
                    notes: notes.clone(),
                    kind: kind.clone(),
                };
                let created = interviews::insert(&pool.conn, &interview)?;
                log::oplog(
                    &pool.conn,
                    "interview.add",
                    &role_id.to_string(),
                    &format!("Interview {} created", created.interview_id),
                )
                .ok();
                success(format!("Interview created (id {})", created.interview_id));
            }

            InterviewCmd::List => {
                let set = interviews::listing(&pool.conn)?;
                print!("{}", render(&set, &cfg.separator_char));
            }

            InterviewCmd::Update {
                id,
                role_id,
                date,
                start,
                end,
                notes,
                kind,
            } => {
                let Some(mut interview) = interviews::get(&pool.conn, *id)? else {
                    warning(format!("No interview with id {id}"));
                    return Ok(());
                };
                if let Some(v) = role_id {
                    interview.role_id = *v;
                }
                if let Some(v) = date {
                    interview.date = Some(v.clone());
                }
                if let Some(v) = start {
                    interview.start = Some(v.clone());
                }
                if let Some(v) = end {
                    interview.end = Some(v.clone());
                }
                if let Some(v) = notes {
                    interview.notes = Some(v.clone());
                }
                if let Some(v) = kind {
                    interview.kind = Some(v.clone());
                }

                let affected = interviews::update(&pool.conn, &interview)?;
                if affected == 0 {
                    warning(format!("No interview with id {id}"));
                } else {
                    success(format!("Interview {id} updated"));
                }
            }

            InterviewCmd::Del { id } => {
                let affected = interviews::delete(&pool.conn, *id)?;
                if affected == 0 {
                    warning(format!("No interview with id {id}"));
                } else {
                    log::oplog(
                        &pool.conn,
                        "interview.del",
                        &id.to_string(),
                        &format!("Interview {id} deleted"),
                    )
                    .ok();
                    success(format!("Interview {id} deleted"));
                }
            }
        }
    }
    Ok(())
}

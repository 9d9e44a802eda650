use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, RoleCmd};
use crate::config::Config;
use crate::db::{log, roles};
use crate::errors::AppResult;
use crate::models::Role;
use crate::ui::messages::{success, warning};
use crate::utils::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Role { action } = cmd {
        let pool = open_session(cfg)?;

        match action {
            RoleCmd::Add {
                company_id,
                name,
                url,
                description,
                cover_letter,
                applied,
                applied_date,
                closed_date,
                posted_min,
                posted_max,
                equity,
                work_city,
                work_state,
                location,
                status,
                discovery,
                referral,
                notes,
            } => {
                let role = Role {
                    role_id: 0,
                    company_id: *company_id,
                    name: name.clone(),
                    url: url.clone(),
                    description: description.clone(),
                    cover_letter: cover_letter.clone(),
                    applied: applied.clone(),
                    applied_date: applied_date.clone(),
                    closed_date: closed_date.clone(),
                    posted_range_min: *posted_min,
                    posted_range_max: *posted_max,
                    equity: *equity,
                    work_city: work_city.clone(),
                    work_state: work_state.clone(),
                    location: location.clone(),
                    status: status.clone(),
                    discovery: discovery.clone(),
                    referral: *referral,
                    notes: notes.clone(),
                };
                let created = roles::insert(&pool.conn, &role)?;
                log::oplog(
                    &pool.conn,
                    "role.add",
                    &created.name,
                    &format!("Role {} created", created.role_id),
                )
                .ok();
                success(format!(
                    "Role '{}' created (id {})",
                    created.name, created.role_id
                ));
            }

            RoleCmd::List => {
                let set = roles::listing(&pool.conn)?;
                print!("{}", render(&set, &cfg.separator_char));
            }

            RoleCmd::Update {
                id,
                company_id,
                name,
                url,
                description,
                cover_letter,
                applied,
                applied_date,
                closed_date,
                posted_min,
                posted_max,
                equity,
                work_city,
                work_state,
                location,
                status,
                discovery,
                referral,
                notes,
            } => {
                let Some(mut role) = roles::get(&pool.conn, *id)? else {
                    warning(format!("No role with id {id}"));
                    return Ok(());
                };
                if let Some(v) = company_id {
                    role.company_id = *v;
                }
                if let Some(v) = name {
                    role.name = v.clone();
                }
                if let Some(v) = url {
                    role.url = Some(v.clone());
                }
                if let Some(v) = description {
                    role.description = Some(v.clone());
                }
                if let Some(v) = cover_letter {
                    role.cover_letter = Some(v.clone());
                }
                if let Some(v) = applied {
                    role.applied = Some(v.clone());
                }
                if let Some(v) = applied_date {
                    role.applied_date = Some(v.clone());
                }
                if let Some(v) = closed_date {
                    role.closed_date = Some(v.clone());
                }
                if let Some(v) = posted_min {
                    role.posted_range_min = Some(*v);
                }
                if let Some(v) = posted_max {
                    role.posted_range_max = Some(*v);
                }
                if let Some(v) = equity {
                    role.equity = Some(*v);
                }
                if let Some(v) = work_city {
                    role.work_city = Some(v.clone());
                }
                if let Some(v) = work_state {
                    role.work_state = Some(v.clone());
                }
                if let Some(v) = location {
                    role.location = Some(v.clone());
                }
                if let Some(v) = status {
                    role.status = Some(v.clone());
                }
                if let Some(v) = discovery {
                    role.discovery = Some(v.clone());
                }
                if let Some(v) = referral {
                    role.referral = Some(*v);
                }
                if let Some(v) = notes {
                    role.notes = Some(v.clone());
                }

                let affected = roles::update(&pool.conn, &role)?;
                if affected == 0 {
                    warning(format!("No role with id {id}"));
                } else {
                    success(format!("Role {id} updated"));
                }
            }

            RoleCmd::Del { id } => {
                let affected = roles::delete(&pool.conn, *id)?;
                if affected == 0 {
                    warning(format!("No role with id {id}"));
                } else {
                    log::oplog(
                        &pool.conn,
                        "role.del",
                        &id.to_string(),
                        &format!("Role {id} deleted"),
                    )
                    .ok();
                    success(format!("Role {id} deleted"));
                }
            }
        }
    }
    Ok(())
}

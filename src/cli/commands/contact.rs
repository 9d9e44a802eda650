use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, ContactCmd};
use crate::config::Config;
use crate::db::{contacts, log};
use crate::errors::AppResult;
use crate::models::Contact;
use crate::ui::messages::{success, warning};
use crate::utils::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Contact { action } = cmd {
        let pool = open_session(cfg)?;

        match action {
            ContactCmd::Add {
                company_id,
                first_name,
                last_name,
                role,
                email,
                phone,
                linkedin,
                notes,
            } => {
                let contact = Contact {
                    contact_id: 0,
                    company_id: *company_id,
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    role: role.clone(),
                    email: email.clone(),
                    phone: phone.clone(),
                    linkedin: linkedin.clone(),
                    notes: notes.clone(),
                };
                let created = contacts::insert(&pool.conn, &contact)?;
                log::oplog(
                    &pool.conn,
                    "contact.add",
                    &created.display_name(),
                    &format!("Contact {} created", created.contact_id),
                )
                .ok();
                success(format!("Contact created (id {})", created.contact_id));
            }

            ContactCmd::List => {
                let set = contacts::listing(&pool.conn)?;
                print!("{}", render(&set, &cfg.separator_char));
            }

            ContactCmd::Update {
                id,
                company_id,
                first_name,
                last_name,
                role,
                email,
                phone,
                linkedin,
                notes,
            } => {
                let Some(mut contact) = contacts::get(&pool.conn, *id)? else {
                    warning(format!("No contact with id {id}"));
                    return Ok(());
                };
                if let Some(v) = company_id {
                    contact.company_id = *v;
                }
                if let Some(v) = first_name {
                    contact.first_name = Some(v.clone());
                }
                if let Some(v) = last_name {
                    contact.last_name = Some(v.clone());
                }
                if let Some(v) = role {
                    contact.role = Some(v.clone());
                }
                if let Some(v) = email {
                    contact.email = Some(v.clone());
                }
                if let Some(v) = phone {
                    contact.phone = Some(v.clone());
                }
                if let Some(v) = linkedin {
                    contact.linkedin = Some(v.clone());
                }
                if let Some(v) = notes {
                    contact.notes = Some(v.clone());
                }

                let affected = contacts::update(&pool.conn, &contact)?;
                if affected == 0 {
                    warning(format!("No contact with id {id}"));
                } else {
                    success(format!("Contact {id} updated"));
                }
            }

            ContactCmd::Del { id } => {
                let affected = contacts::delete(&pool.conn, *id)?;
                if affected == 0 {
                    warning(format!("No contact with id {id}"));
                } else {
                    log::oplog(
                        &pool.conn,
                        "contact.del",
                        &id.to_string(),
                        &format!("Contact {id} deleted"),
                    )
                    .ok();
                    success(format!("Contact {id} deleted"));
                }
            }
        }
    }
    Ok(())
}

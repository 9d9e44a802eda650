use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, CompanyCmd};
use crate::config::Config;
use crate::db::{companies, log};
use crate::errors::AppResult;
use crate::models::Company;
use crate::ui::messages::{success, warning};
use crate::utils::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Company { action } = cmd {
        let pool = open_session(cfg)?;

        match action {
            CompanyCmd::Add {
                name,
                description,
                url,
                hq_city,
                hq_state,
            } => {
                let company = Company {
                    company_id: 0,
                    name: name.clone(),
                    description: description.clone(),
                    url: url.clone(),
                    hq_city: hq_city.clone(),
                    hq_state: hq_state.clone(),
                };
                let created = companies::insert(&pool.conn, &company)?;
                log::oplog(
                    &pool.conn,
                    "company.add",
                    &created.name,
                    &format!("Company {} created", created.company_id),
                )
                .ok();
                success(format!(
                    "Company '{}' created (id {})",
                    created.name, created.company_id
                ));
            }

            CompanyCmd::List => {
                let set = companies::listing(&pool.conn)?;
                print!("{}", render(&set, &cfg.separator_char));
            }

            CompanyCmd::Update {
                id,
                name,
                description,
                url,
                hq_city,
                hq_state,
            } => {
                let Some(mut company) = companies::get(&pool.conn, *id)? else {
                    warning(format!("No company with id {id}"));
                    return Ok(());
                };
                if let Some(v) = name {
                    company.name = v.clone();
                }
                if let Some(v) = description {
                    company.description = Some(v.clone());
                }
                if let Some(v) = url {
                    company.url = Some(v.clone());
                }
                if let Some(v) = hq_city {
                    company.hq_city = Some(v.clone());
                }
                if let Some(v) = hq_state {
                    company.hq_state = Some(v.clone());
                }

                let affected = companies::update(&pool.conn, &company)?;
                if affected == 0 {
                    warning(format!("No company with id {id}"));
                } else {
                    success(format!("Company {id} updated"));
                }
            }

            CompanyCmd::Del { id } => {
                let affected = companies::delete(&pool.conn, *id)?;
                if affected == 0 {
                    warning(format!("No company with id {id}"));
                } else {
                    log::oplog(
                        &pool.conn,
                        "company.del",
                        &id.to_string(),
                        &format!("Company {id} deleted"),
                    )
                    .ok();
                    success(format!("Company {id} deleted"));
                }
            }
        }
    }
    Ok(())
}

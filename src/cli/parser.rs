use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for jobtrack
/// CLI application to track job applications with SQLite
#[derive(Parser)]
#[command(
    name = "jobtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal job-application tracker: companies, roles, interviews and contacts in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Start the interactive menu
    Menu,

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyCmd,
    },

    /// Manage roles (positions at a company)
    Role {
        #[command(subcommand)]
        action: RoleCmd,
    },

    /// Manage interviews
    Interview {
        #[command(subcommand)]
        action: InterviewCmd,
    },

    /// Manage contacts
    Contact {
        #[command(subcommand)]
        action: ContactCmd,
    },

    /// Link interviews to contacts
    Link {
        #[command(subcommand)]
        action: LinkCmd,
    },

    /// Run a raw SQL statement against the database (no validation!)
    Query {
        /// The statement to run; a leading SELECT means "render rows"
        sql: String,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup with gzip
        #[arg(long)]
        compress: bool,
    },

    /// Export an entity table
    Export {
        /// Which entity to export
        #[arg(long, value_enum)]
        entity: EntityKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Company,
    Role,
    Interview,
    Contact,
    Link,
}

#[derive(Subcommand)]
pub enum CompanyCmd {
    /// Add a company
    Add {
        /// Company name
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long = "hq-city")]
        hq_city: Option<String>,

        #[arg(long = "hq-state")]
        hq_state: Option<String>,
    },

    /// List all companies
    List,

    /// Update a company (unset fields keep their current value)
    Update {
        /// Company id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long = "hq-city")]
        hq_city: Option<String>,

        #[arg(long = "hq-state")]
        hq_state: Option<String>,
    },

    /// Delete a company by id
    Del {
        /// Company id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum RoleCmd {
    /// Add a role
    Add {
        /// Owning company id
        company_id: i64,

        /// Role name
        name: String,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "cover-letter")]
        cover_letter: Option<String>,

        /// Where the application was submitted (site, referral, email, ...)
        #[arg(long)]
        applied: Option<String>,

        #[arg(long = "applied-date")]
        applied_date: Option<String>,

        #[arg(long = "closed-date")]
        closed_date: Option<String>,

        /// Posted salary range lower bound
        #[arg(long = "posted-min")]
        posted_min: Option<i64>,

        /// Posted salary range upper bound
        #[arg(long = "posted-max")]
        posted_max: Option<i64>,

        /// Equity offered (true/false)
        #[arg(long)]
        equity: Option<bool>,

        #[arg(long = "work-city")]
        work_city: Option<String>,

        #[arg(long = "work-state")]
        work_state: Option<String>,

        /// onsite / hybrid / remote
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        status: Option<String>,

        /// How the role was discovered
        #[arg(long)]
        discovery: Option<String>,

        /// Referred by someone (true/false)
        #[arg(long)]
        referral: Option<bool>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List roles with their company name
    List,

    /// Update a role (unset fields keep their current value)
    Update {
        /// Role id
        id: i64,

        #[arg(long = "company-id")]
        company_id: Option<i64>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "cover-letter")]
        cover_letter: Option<String>,

        #[arg(long)]
        applied: Option<String>,

        #[arg(long = "applied-date")]
        applied_date: Option<String>,

        #[arg(long = "closed-date")]
        closed_date: Option<String>,

        #[arg(long = "posted-min")]
        posted_min: Option<i64>,

        #[arg(long = "posted-max")]
        posted_max: Option<i64>,

        #[arg(long)]
        equity: Option<bool>,

        #[arg(long = "work-city")]
        work_city: Option<String>,

        #[arg(long = "work-state")]
        work_state: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        discovery: Option<String>,

        #[arg(long)]
        referral: Option<bool>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a role by id
    Del {
        /// Role id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum InterviewCmd {
    /// Add an interview
    Add {
        /// Owning role id
        role_id: i64,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Interview type (phone, onsite, panel, ...)
        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// List interviews with role and company names
    List,

    /// Update an interview (unset fields keep their current value)
    Update {
        /// Interview id
        id: i64,

        #[arg(long = "role-id")]
        role_id: Option<i64>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// Delete an interview by id
    Del {
        /// Interview id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ContactCmd {
    /// Add a contact
    Add {
        /// Owning company id
        company_id: i64,

        #[arg(long = "first-name")]
        first_name: Option<String>,

        #[arg(long = "last-name")]
        last_name: Option<String>,

        /// The contact's role at the company
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        linkedin: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List contacts with their company name
    List,

    /// Update a contact (unset fields keep their current value)
    Update {
        /// Contact id
        id: i64,

        #[arg(long = "company-id")]
        company_id: Option<i64>,

        #[arg(long = "first-name")]
        first_name: Option<String>,

        #[arg(long = "last-name")]
        last_name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        linkedin: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a contact by id
    Del {
        /// Contact id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum LinkCmd {
    /// Link an interview to a contact
    Add {
        /// Interview id
        interview_id: i64,

        /// Contact id
        contact_id: i64,
    },

    /// List interview-contact links
    List,

    /// Delete a link by id
    Del {
        /// Link id
        id: i64,
    },
}

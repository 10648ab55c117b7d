use clap::Parser;
use cricstats::cli::{self, Cli, Command};
use cricstats::config::AppConfig;
use cricstats::console::QueryConsole;
use cricstats::cricbuzz::CricbuzzClient;
use cricstats::db::QueryResult;
use cricstats::db::mysql::MySqlBackend;
use cricstats::db::schema;
use cricstats::error::CricError;
use cricstats::format_detect::{self, OutputFormat};
use cricstats::players::{self, Candidate};
use cricstats::profile::{self, PlayerReport};
use cricstats::{catalog, config, format, format_csv, masking, output, verbose, web};
use std::process;

#[tokio::main]
async fn main() {
    // Load .env file (optional, ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        output::print_error(&err);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CricError> {
    let mut app_config = config::load(
        &cli.connection,
        cli.verbose,
        cli.show_secrets,
        cli.config.as_ref(),
    )?;
    verbose::init(app_config.verbose);

    match cli.command {
        Command::Serve(ref args) => {
            app_config.server.apply(args.host.as_deref(), args.port);
            web::serve(app_config).await
        }
        Command::Queries => {
            output::print_result(&format::to_toon(&format::catalog_to_result(catalog::entries()))?);
            Ok(())
        }
        Command::Run(ref args) => run_query(&app_config, args).await,
        Command::Tables => list_tables(&app_config).await,
        Command::Preview(ref args) => preview_table(&app_config, &args.table).await,
        Command::Columns(ref args) => describe_table(&app_config, &args.table).await,
        Command::Search(ref args) => search(&app_config, &args.name).await,
        Command::Player(ref args) => show_player(&app_config, args).await,
        Command::Config => {
            output::print_result(&format::to_toon_kv(&masking::describe_config(&app_config)));
            Ok(())
        }
    }
}

fn console(app_config: &AppConfig) -> Result<QueryConsole<MySqlBackend>, CricError> {
    let db = app_config.require_database()?.clone();
    Ok(QueryConsole::new(
        MySqlBackend::new(db),
        app_config.row_limit,
        app_config.query_timeout_secs,
    ))
}

// --- SQL flows ---

/// Hand-written SQL from `--sql` or `--file`, if either was given.
fn custom_sql(args: &cli::RunArgs) -> Result<Option<String>, CricError> {
    if let Some(ref sql) = args.sql {
        return Ok(Some(sql.clone()));
    }
    match args.sql_file {
        Some(ref path) => std::fs::read_to_string(path)
            .map(Some)
            .map_err(|e| CricError::Config {
                message: format!("cannot read SQL file {}: {}", path.display(), e),
            }),
        None => Ok(None),
    }
}

async fn run_query(app_config: &AppConfig, args: &cli::RunArgs) -> Result<(), CricError> {
    let custom = custom_sql(args)?;

    // Detect output format before query (fail-fast on bad extension)
    let format_info = match args.output {
        Some(ref path) => Some(format_detect::detect_format(path)?),
        None => None,
    };

    let console = console(app_config)?;
    let outcome = match (custom, args.id.as_deref()) {
        (Some(sql), _) => console.run_sql(&sql).await?,
        (None, Some(id)) => console.run_entry(id).await?,
        (None, None) => {
            return Err(CricError::Config {
                message: "no SQL provided — give a catalog id, --sql or --file".to_string(),
            });
        }
    };
    if let Some(ref warning) = outcome.warning {
        output::print_warning(warning);
    }
    write_result(app_config, &outcome.result, format_info)
}

fn write_result(
    app_config: &AppConfig,
    result: &QueryResult,
    format_info: Option<(OutputFormat, std::path::PathBuf)>,
) -> Result<(), CricError> {
    match format_info {
        Some((kind, path)) => {
            tracing::debug!(format = kind.label(), path = %path.display(), "writing output");
            match kind {
                OutputFormat::Toon => output::write_file(&format::to_toon(result)?, &path)?,
                OutputFormat::Csv => format_csv::write_csv(result, &path)?,
            }
            output::print_summary(result.rows.len(), &path, result.truncated)
        }
        None => {
            output::print_result(&format::to_toon(result)?);
            if result.truncated
                && let Some(limit) = app_config.row_limit
            {
                output::print_warning(&format!(
                    "showing the first {} rows; raise --limit to see more",
                    limit
                ));
            }
            Ok(())
        }
    }
}

async fn list_tables(app_config: &AppConfig) -> Result<(), CricError> {
    let console = console(app_config)?;
    let tables = schema::list_tables(console.backend()).await?;
    let rows = tables.into_iter().map(|t| vec![Some(t)]).collect();
    output::print_result(&format::to_toon(&QueryResult::from_text_rows(&["table"], rows))?);
    Ok(())
}

async fn preview_table(app_config: &AppConfig, table: &str) -> Result<(), CricError> {
    let console = console(app_config)?;
    let result = schema::preview_table(console.backend(), table, app_config.row_limit).await?;
    output::print_result(&format::to_toon(&result)?);
    Ok(())
}

async fn describe_table(app_config: &AppConfig, table: &str) -> Result<(), CricError> {
    let console = console(app_config)?;
    let result = schema::table_columns(console.backend(), table).await?;
    if result.rows.is_empty() {
        output::print_warning(&format!("no columns found for table {}", table));
        return Ok(());
    }
    output::print_result(&format::to_toon(&result)?);
    Ok(())
}

// --- Player flows ---

async fn search(app_config: &AppConfig, name: &str) -> Result<(), CricError> {
    let api = CricbuzzClient::new(app_config.require_api()?.clone());
    let candidates = players::search(&api, name).await?;
    if candidates.is_empty() {
        output::print_warning("No players found. Try another name.");
        return Ok(());
    }
    output::print_result(&format::to_toon(&format::candidates_to_result(&candidates))?);
    Ok(())
}

async fn show_player(app_config: &AppConfig, args: &cli::PlayerArgs) -> Result<(), CricError> {
    let api = CricbuzzClient::new(app_config.require_api()?.clone());
    let candidate = Candidate {
        id: players::parse_player_id(&args.id)?,
        face_image_id: args.face_image_id.clone(),
        ..Default::default()
    };
    let report = profile::assemble_report(&api, &candidate).await;
    print_report(&report)
}

fn print_report(report: &PlayerReport) -> Result<(), CricError> {
    let p = &report.profile;

    output::print_section("Profile");
    let mut pairs = vec![
        ("Name", p.display_name().to_string()),
        ("DOB", p.dob().to_string()),
    ];
    pairs.extend(p.record.display_fields());
    pairs.push(("Image", p.image_url.clone()));
    pairs.push(("Cricbuzz", profile::display(p.record.web_url.as_deref()).to_string()));
    output::print_result(&format::to_toon_kv(&pairs));

    output::print_section("ICC Rankings");
    for (heading, table) in p.rankings.disciplines() {
        println!("{}:", heading);
        match table {
            Some(t) if !t.is_empty() => output::print_result(&format::to_toon(&format::rankings_to_result(t))?),
            _ => println!("No rankings available"),
        }
    }

    output::print_section("Career Debut Information");
    if p.career.is_empty() {
        println!("No career debut information available.");
    } else {
        output::print_result(&format::to_toon(&format::career_to_result(&p.career))?);
    }

    for (title, table, empty) in [
        ("Batting Stats", &report.batting, "No batting stats available."),
        ("Bowling Stats", &report.bowling, "No bowling stats available."),
    ] {
        output::print_section(title);
        if table.is_empty() {
            println!("{}", empty);
        } else {
            output::print_result(&format::to_toon(&format::stats_to_result(table))?);
        }
    }
    Ok(())
}

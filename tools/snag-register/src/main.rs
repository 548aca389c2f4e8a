//! snag-register: manage the snag register from the command line.
//!
//! Usage:
//!   snag-register list   [--development D] [--trade T] [--priority P] [--search TERM] [--desc]
//!   snag-register add    --title T --notes N [--plot P] [--development D] [--photo URL]
//!   snag-register edit   <id> --title T --notes N [--plot P] [--development D] [--photo URL]
//!   snag-register delete <id>
//!   snag-register export [list filters] [--out FILE]
//!   snag-register seed
//!
//! Every command accepts --store PATH (default ./snag-tracker-snags.json).
//! Notes are re-analysed on every add/edit; the analysis fields on a record
//! are never edited directly.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use chrono::{Local, NaiveDate};
use snag_engine::Priority;
use snag_register::filter::{self, FilterOptions};
use snag_register::{export, seed, store, Register, SnagDraft, SnagRecord};

#[derive(Debug, Default)]
struct CliOptions {
    store: Option<PathBuf>,
    positional: Vec<String>,
    title: Option<String>,
    notes: Option<String>,
    plot: Option<String>,
    development: Option<String>,
    photo: Option<String>,
    trade: Option<String>,
    priority: Option<String>,
    search: Option<String>,
    descending: bool,
    out: Option<PathBuf>,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
        process::exit(2);
    }

    let command = args[0].clone();
    let opts = parse_options(&args[1..]);
    let store_path = opts
        .store
        .clone()
        .unwrap_or_else(|| PathBuf::from(store::STORAGE_FILE));
    let today = Local::now().date_naive();
    let mut register = Register::load(&store_path, today);

    match command.as_str() {
        "list" => cmd_list(&register, &opts),
        "add" => cmd_add(&mut register, &opts, today),
        "edit" => cmd_edit(&mut register, &opts, today),
        "delete" => cmd_delete(&mut register, &opts),
        "export" => cmd_export(&register, &opts, today),
        "seed" => {
            register = Register::from_records(seed::seed_records(today, &store::now_iso()));
            println!("Seeded {} sample snags", register.records().len());
        }
        _ => {
            usage();
            process::exit(2);
        }
    }

    // Persist after every command; a first load of a missing store seeds,
    // and the seed should survive.
    if let Err(e) = register.save(&store_path) {
        eprintln!(
            "snag-register: cannot write {}: {}",
            store_path.display(),
            e
        );
        process::exit(1);
    }
}

fn cmd_list(register: &Register, opts: &CliOptions) {
    let rows = filter::filtered(register.records(), &filter_options(opts));
    if rows.is_empty() {
        println!("No snags match the current filters.");
        return;
    }
    for record in rows {
        println!(
            "{}  {:<6} {:<11} due {}  {}",
            record.id,
            record.priority.as_str(),
            record.trade.as_str(),
            record.due_date,
            record.title
        );
        if !record.summary.is_empty() {
            println!("{:38}{}", "", record.summary);
        }
    }
}

fn cmd_add(register: &mut Register, opts: &CliOptions, today: NaiveDate) {
    let draft = draft_from(opts);
    match register.add(&draft, today) {
        Ok(record) => {
            println!("Added {}", record.id);
            print_analysis(record);
        }
        Err(e) => fail(&e.to_string()),
    }
}

fn cmd_edit(register: &mut Register, opts: &CliOptions, today: NaiveDate) {
    let id = require_id(opts, "edit");
    let draft = draft_from(opts);
    match register.update(&id, &draft, today) {
        Ok(record) => {
            println!("Updated {}", record.id);
            print_analysis(record);
        }
        Err(e) => fail(&e.to_string()),
    }
}

fn cmd_delete(register: &mut Register, opts: &CliOptions) {
    let id = require_id(opts, "delete");
    match register.delete(&id) {
        Ok(record) => println!("Deleted {} ({})", record.id, record.title),
        Err(e) => fail(&e.to_string()),
    }
}

fn cmd_export(register: &Register, opts: &CliOptions, today: NaiveDate) {
    let rows = filter::filtered(register.records(), &filter_options(opts));
    let csv = export::to_csv(&rows);
    if csv.is_empty() {
        eprintln!("snag-register: nothing to export");
        process::exit(1);
    }

    let path = opts
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(export::export_filename(today)));
    if let Err(e) = fs::write(&path, &csv) {
        eprintln!("snag-register: cannot write {}: {}", path.display(), e);
        process::exit(1);
    }
    println!("Exported {} snags to {}", rows.len(), path.display());
}

fn print_analysis(record: &SnagRecord) {
    println!("  trade       {}", record.trade.as_str());
    println!("  priority    {}", record.priority.as_str());
    println!("  due date    {}", record.due_date);
    println!("  defect      {}", record.defect_type);
    println!("  confidence  {}%", record.confidence);
}

fn draft_from(opts: &CliOptions) -> SnagDraft {
    SnagDraft {
        title: opts.title.clone().unwrap_or_default(),
        notes: opts.notes.clone().unwrap_or_default(),
        plot: opts.plot.clone().unwrap_or_default(),
        development: opts.development.clone().unwrap_or_default(),
        photo_url: opts.photo.clone().unwrap_or_default(),
    }
}

fn filter_options(opts: &CliOptions) -> FilterOptions {
    let priority = opts.priority.as_deref().map(|p| {
        match Priority::from_str_loose(p) {
            Some(priority) => priority,
            None => {
                eprintln!(
                    "snag-register: unknown priority {:?} (expected High, Medium, or Low)",
                    p
                );
                process::exit(2);
            }
        }
    });
    FilterOptions {
        development: opts.development.clone(),
        trade: opts.trade.clone(),
        priority,
        search: opts.search.clone().unwrap_or_default(),
        descending: opts.descending,
    }
}

fn require_id(opts: &CliOptions, command: &str) -> String {
    match opts.positional.first() {
        Some(id) => id.clone(),
        None => {
            eprintln!("snag-register: {} expects a snag id", command);
            process::exit(2);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("snag-register: {}", message);
    process::exit(1);
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut opts = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--desc" => opts.descending = true,
            "--store" => opts.store = Some(PathBuf::from(take_value(args, &mut i, arg))),
            "--title" => opts.title = Some(take_value(args, &mut i, arg)),
            "--notes" => opts.notes = Some(take_value(args, &mut i, arg)),
            "--plot" => opts.plot = Some(take_value(args, &mut i, arg)),
            "--development" => opts.development = Some(take_value(args, &mut i, arg)),
            "--photo" => opts.photo = Some(take_value(args, &mut i, arg)),
            "--trade" => opts.trade = Some(take_value(args, &mut i, arg)),
            "--priority" => opts.priority = Some(take_value(args, &mut i, arg)),
            "--search" => opts.search = Some(take_value(args, &mut i, arg)),
            "--out" => opts.out = Some(PathBuf::from(take_value(args, &mut i, arg))),
            _ if arg.starts_with('-') => {
                eprintln!("snag-register: unknown flag {}", arg);
                usage();
                process::exit(2);
            }
            _ => opts.positional.push(arg.to_string()),
        }
        i += 1;
    }
    opts
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("snag-register: {} expects a value", flag);
            process::exit(2);
        }
    }
}

fn usage() {
    eprintln!("Usage: snag-register <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list    [--development D] [--trade T] [--priority P] [--search TERM] [--desc]");
    eprintln!("  add     --title T --notes N [--plot P] [--development D] [--photo URL]");
    eprintln!("  edit    <id> --title T --notes N [--plot P] [--development D] [--photo URL]");
    eprintln!("  delete  <id>");
    eprintln!("  export  [list filters] [--out FILE]  (default: snag-tracker-<date>.csv)");
    eprintln!("  seed    replace the register with the sample snags");
    eprintln!();
    eprintln!("  --store PATH  register file (default {})", store::STORAGE_FILE);
}

use clap::{Arg, Command};
use dirstore::DirStore;
use dirstore::Result;
use log::debug;
use std::process;

fn main() -> Result<()> {
    env_logger::init();
    let file_arg = Arg::new("FILE")
        .short('f')
        .long("file")
        .help("Path of the JSON directory file")
        .default_value("users.json");
    let command = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a user with an email address")
                .arg(Arg::new("USERNAME").help("A unique username").required(true))
                .arg(
                    Arg::new("EMAIL")
                        .help("The user's email address")
                        .required(true),
                )
                .arg(file_arg.clone()),
        )
        .subcommand(
            Command::new("get")
                .about("Print the email address of a given user")
                .arg(Arg::new("USERNAME").help("A unique username").required(true))
                .arg(file_arg.clone()),
        )
        .subcommand(
            Command::new("rm")
                .about("Remove a given user")
                .arg(Arg::new("USERNAME").help("A unique username").required(true))
                .arg(file_arg.clone()),
        )
        .subcommand(
            Command::new("list")
                .about("List all usernames")
                .arg(file_arg.clone()),
        )
        .get_matches();
    match command.subcommand() {
        Some(("add", args)) => {
            let path = args.get_one::<String>("FILE").unwrap();
            let username = args.get_one::<String>("USERNAME").unwrap();
            let email = args.get_one::<String>("EMAIL").unwrap();
            let mut store = DirStore::new();
            store.load(path)?;
            if !store.add(username.to_owned(), email.to_owned()) {
                eprintln!("User already exists");
                process::exit(-1);
            }
            store.save(path)?;
            debug!("added {} to {}", username, path);
        }
        Some(("get", args)) => {
            let path = args.get_one::<String>("FILE").unwrap();
            let username = args.get_one::<String>("USERNAME").unwrap();
            let mut store = DirStore::new();
            store.load(path)?;
            match store.get(username) {
                Some(email) => println!("{}", email),
                None => println!("User not found"),
            }
        }
        Some(("rm", args)) => {
            let path = args.get_one::<String>("FILE").unwrap();
            let username = args.get_one::<String>("USERNAME").unwrap();
            let mut store = DirStore::new();
            store.load(path)?;
            if !store.remove(username) {
                eprintln!("User not found");
                process::exit(-1);
            }
            store.save(path)?;
            debug!("removed {} from {}", username, path);
        }
        Some(("list", args)) => {
            let path = args.get_one::<String>("FILE").unwrap();
            let mut store = DirStore::new();
            store.load(path)?;
            for username in store.list_keys() {
                println!("{}", username);
            }
        }
        _ => process::exit(-1),
    }
    Ok(())
}

use std::{env, process};

use socialgraph::{
    SocialGraph,
    client::{CommandLineConfig, run_command},
    dataset::load_graph_from_path,
};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let graph = match &config.graph {
        Some(path) => match load_graph_from_path(path) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("failed to load {path}: {err}");
                process::exit(2);
            }
        },
        None => SocialGraph::new(),
    };

    match run_command(&graph, &config) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("command failed: {err}");
                process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("command failed: {err}");
            process::exit(1);
        }
    }
}

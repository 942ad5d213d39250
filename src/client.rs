use serde_json::{Value, json};

use crate::{
    SocialGraphError,
    config::{DEFAULT_TOP_N, GraphConfig},
    graph::SocialGraph,
    query::GraphQuery,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub graph: Option<String>,
    pub command: String,
    pub user: Option<String>,
    pub target: Option<String>,
    pub top: usize,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut graph = None;
        let mut command = String::from("status");
        let mut user = None;
        let mut target = None;
        let mut top = DEFAULT_TOP_N;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--graph" => {
                    graph = Some(
                        iter.next()
                            .ok_or_else(|| "--graph requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                }
                "--user" => {
                    user = Some(
                        iter.next()
                            .ok_or_else(|| "--user requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--target" => {
                    target = Some(
                        iter.next()
                            .ok_or_else(|| "--target requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--top" => {
                    let value = iter.next().ok_or_else(|| "--top requires a value".to_string())?;
                    top = value
                        .parse()
                        .map_err(|_| format!("--top expects a number, got {value}"))?;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                }
            }
        }
        Ok(Self {
            graph,
            command,
            user,
            target,
            top,
        })
    }

    pub fn help() -> &'static str {
        concat!(
            "Usage: socialgraph [--graph PATH] [--command NAME] [--user KEY]\n",
            "                   [--target KEY] [--top N]\n",
            "Commands: status users friends mutual bfs dfs path recommend influencers\n",
            "          components stats snapshot\n",
        )
    }

    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::default().with_default_top_n(self.top)
    }

    fn require_user(&self) -> Result<&str, SocialGraphError> {
        self.user.as_deref().ok_or_else(|| {
            SocialGraphError::invalid_input(format!("{} requires --user", self.command))
        })
    }

    fn require_target(&self) -> Result<&str, SocialGraphError> {
        self.target.as_deref().ok_or_else(|| {
            SocialGraphError::invalid_input(format!("{} requires --target", self.command))
        })
    }
}

/// Runs one command against `graph` and returns its result as JSON.
pub fn run_command(
    graph: &SocialGraph,
    config: &CommandLineConfig,
) -> Result<Value, SocialGraphError> {
    let query = GraphQuery::with_config(graph, &config.graph_config());
    let value = match config.command.as_str() {
        "status" => json!({
            "users": graph.user_count(),
            "friendships": graph.friendship_count(),
        }),
        "users" => json!(graph.user_ids()),
        "friends" => json!(query.friends(config.require_user()?)),
        "mutual" => json!(query.mutual_friends(config.require_user()?, config.require_target()?)),
        "bfs" => serde_json::to_value(query.bfs(config.require_user()?)?)?,
        "dfs" => json!(query.dfs(config.require_user()?)?),
        "path" => {
            let path = query.shortest_path(config.require_user()?, config.require_target()?)?;
            let degrees = path.as_ref().map(|p| p.len() - 1);
            json!({ "path": path, "degrees": degrees })
        }
        "recommend" => serde_json::to_value(query.recommendations(config.require_user()?))?,
        "influencers" => serde_json::to_value(query.influencers())?,
        "components" => json!(query.communities()),
        "stats" => serde_json::to_value(query.statistics())?,
        "snapshot" => serde_json::to_value(graph.snapshot())?,
        other => {
            return Err(SocialGraphError::invalid_input(format!("unknown command {other}")));
        }
    };
    Ok(value)
}

//! JSON dataset input: a list of users followed by the friendships between them.

use std::{fs::File, io::BufReader, io::Read, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    errors::SocialGraphError,
    graph::{NewUser, SocialGraph},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDataset {
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub friendships: Vec<(String, String)>,
}

impl NetworkDataset {
    pub fn from_json(input: &str) -> Result<Self, SocialGraphError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SocialGraphError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SocialGraphError> {
        let file = File::open(path.as_ref())
            .map_err(|e| SocialGraphError::invalid_input(e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Applies every user and friendship to `graph`, stopping at the first
    /// rejected record.
    pub fn apply(&self, graph: &mut SocialGraph) -> Result<(), SocialGraphError> {
        for user in &self.users {
            graph.insert_user(user.clone()).inspect_err(|err| {
                warn!("dataset user {} rejected: {err}", user.username);
            })?;
        }
        for (a, b) in &self.friendships {
            graph.add_friendship(a, b).inspect_err(|err| {
                warn!("dataset friendship {a} <-> {b} rejected: {err}");
            })?;
        }
        Ok(())
    }

    pub fn build(&self) -> Result<SocialGraph, SocialGraphError> {
        let mut graph = SocialGraph::with_capacity(self.users.len());
        self.apply(&mut graph)?;
        Ok(graph)
    }
}

pub fn load_graph_from_path<P: AsRef<Path>>(path: P) -> Result<SocialGraph, SocialGraphError> {
    NetworkDataset::from_path(path)?.build()
}

//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordFriendsArgs};
use crate::error::Result;

/// Result structure for network discovery.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkOutput {
    pub seed: String,
    pub size: usize,
    pub expansions: usize,
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
}

/// Result structure for direct friends.
#[derive(Debug, Serialize, Deserialize)]
pub struct FriendsOutput {
    pub word: String,
    pub friends: Vec<String>,
}

/// Result structure for a distance comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceOutput {
    pub a: String,
    pub b: String,
    pub distance: usize,
    pub friends: bool,
}

/// Word-list statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub total_words: usize,
    pub distinct_lengths: usize,
    pub buckets: Vec<LengthBucket>,
}

/// Size of one length bucket.
#[derive(Debug, Serialize, Deserialize)]
pub struct LengthBucket {
    pub length: usize,
    pub words: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &WordFriendsArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", result.render_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordFriendsArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for NetworkOutput {
    fn render_human(&self) -> String {
        let mut out = format!(
            "Network of '{}': {} words\nExpansions: {}\nElapsed: {:.3}ms\n",
            self.seed, self.size, self.expansions, self.duration_ms
        );
        if let Some(members) = &self.members {
            out.push('\n');
            for member in members {
                out.push_str(member);
                out.push('\n');
            }
        }
        out
    }
}

impl HumanOutput for FriendsOutput {
    fn render_human(&self) -> String {
        let mut out = format!("Friends of '{}': {}\n", self.word, self.friends.len());
        for friend in &self.friends {
            out.push_str("  ");
            out.push_str(friend);
            out.push('\n');
        }
        out
    }
}

impl HumanOutput for DistanceOutput {
    fn render_human(&self) -> String {
        format!(
            "Distance between '{}' and '{}': {}\nFriends: {}\n",
            self.a,
            self.b,
            self.distance,
            if self.friends { "yes" } else { "no" }
        )
    }
}

impl HumanOutput for StatsOutput {
    fn render_human(&self) -> String {
        let mut out = format!(
            "Total words: {}\nDistinct lengths: {}\n",
            self.total_words, self.distinct_lengths
        );
        for bucket in &self.buckets {
            out.push_str(&format!("  {:>3}: {}\n", bucket.length, bucket.words));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_human_output() {
        let output = NetworkOutput {
            seed: "cat".to_string(),
            size: 2,
            expansions: 3,
            duration_ms: 1.5,
            members: Some(vec!["cot".to_string(), "cog".to_string()]),
        };
        let text = output.render_human();
        assert!(text.starts_with("Network of 'cat': 2 words\n"));
        assert!(text.contains("Elapsed: 1.500ms"));
        assert!(text.ends_with("cot\ncog\n"));
    }

    #[test]
    fn test_network_json_omits_members_when_not_listed() {
        let output = NetworkOutput {
            seed: "cat".to_string(),
            size: 2,
            expansions: 3,
            duration_ms: 1.5,
            members: None,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["size"], 2);
        assert!(json.get("members").is_none());
    }

    #[test]
    fn test_distance_human_output() {
        let output = DistanceOutput {
            a: "cat".to_string(),
            b: "cart".to_string(),
            distance: 1,
            friends: true,
        };
        assert_eq!(
            output.render_human(),
            "Distance between 'cat' and 'cart': 1\nFriends: yes\n"
        );
    }

    #[test]
    fn test_stats_human_output() {
        let output = StatsOutput {
            total_words: 3,
            distinct_lengths: 2,
            buckets: vec![
                LengthBucket { length: 2, words: 1 },
                LengthBucket { length: 3, words: 2 },
            ],
        };
        assert_eq!(
            output.render_human(),
            "Total words: 3\nDistinct lengths: 2\n    2: 1\n    3: 2\n"
        );
    }
}

// Track module
// One horizontally scrollable row (employee, client or weekday)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub label: String,
    pub order: u32,
}

impl Track {
    pub fn new(id: impl Into<String>, label: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            order,
        }
    }

    /// Empty filler row used to pad short rosters.
    pub fn placeholder(order: u32) -> Self {
        Self {
            id: format!("pad-{}", order),
            label: String::new(),
            order,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.label.is_empty() && self.id.starts_with("pad-")
    }
}

/// Sort tracks by `order`, keeping caller order for ties.
pub fn sort_tracks(tracks: &mut [Track]) {
    tracks.sort_by_key(|track| track.order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable_for_equal_order() {
        let mut tracks = vec![
            Track::new("b", "Bea", 1),
            Track::new("a", "Ann", 0),
            Track::new("c", "Cal", 1),
        ];
        sort_tracks(&mut tracks);
        let ids: Vec<_> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_placeholder() {
        let track = Track::placeholder(12);
        assert_eq!(track.id, "pad-12");
        assert!(track.is_placeholder());
        assert!(!Track::new("pad-1", "Real", 1).is_placeholder());
    }
}

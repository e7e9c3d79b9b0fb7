//! # Social Flow
//!
//! Startup rebuild from persisted friendships, concurrent accepts while
//! recommendations are served, and the "people you may know" ordering.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use ag_06_social_graph::{FriendGraph, RecommenderConfig, SharedSocialGraph, SocialGraph};

    fn persisted() -> Vec<(String, String)> {
        [
            ("ana", "ben"),
            ("ana", "cai"),
            ("ben", "dee"),
            ("cai", "dee"),
            ("ben", "eli"),
            ("eli", "fay"),
            ("gus", "gus"),
        ]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
    }

    #[test]
    fn rebuild_then_recommend() {
        let graph = SocialGraph::from_edges(persisted());
        assert_eq!(graph.edge_count(), 6, "self-loop row skipped");

        let shared = SharedSocialGraph::from_graph(graph, RecommenderConfig::default()).unwrap();
        let recs = shared.recommend(&"ana".to_string(), 5);
        // dee shares two friends with ana, eli shares one
        assert_eq!(recs, vec!["dee".to_string(), "eli".to_string()]);
        assert!(shared.recommend(&"zed".to_string(), 5).is_empty());
    }

    #[test]
    fn accepting_a_recommendation_removes_it() {
        let shared =
            SharedSocialGraph::from_graph(SocialGraph::from_edges(persisted()), RecommenderConfig::default())
                .unwrap();
        let ana = "ana".to_string();
        assert_eq!(shared.connect(ana.clone(), "dee".to_string()), Ok(true));
        let recs = shared.recommend(&ana, 5);
        assert!(!recs.contains(&"dee".to_string()));
        assert!(recs.contains(&"eli".to_string()));
    }

    #[test]
    fn concurrent_accepts_with_readers() {
        let shared = Arc::new(SharedSocialGraph::new(RecommenderConfig::default()).unwrap());

        let writers: Vec<_> = (0..4u32)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..250u32 {
                        let a = t * 250 + i;
                        shared.connect(a, (a + 1) % 1_000).unwrap();
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..2)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for node in 0..200u32 {
                        for rec in shared.recommend(&node, 5) {
                            assert_ne!(rec, node);
                        }
                    }
                })
            })
            .collect();
        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }

        // A ring of 1000 nodes
        assert_eq!(shared.edge_count(), 1_000);
        assert_eq!(shared.node_count(), 1_000);
        assert_eq!(shared.recommend(&0, 5), vec![2, 998]);
    }
}

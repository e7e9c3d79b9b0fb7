//! # Feed Flow
//!
//! Ranking functions applied to a small feed the way a front page, a "best"
//! tab and a creator leaderboard would use them.

#[cfg(test)]
mod tests {
    use ag_03_ranking::{
        authority_scores, bayesian_average, controversy_score, hot_score_at, wilson_score,
        AuthorityConfig, ExponentialDecay, HotScoreConfig,
    };
    use shared_types::MS_PER_HOUR;

    struct Post {
        id: &'static str,
        up: u64,
        down: u64,
        age_hours: u64,
        views: u64,
    }

    const NOW: u64 = 1_750_000_000_000;

    fn feed() -> Vec<Post> {
        vec![
            Post { id: "fresh", up: 15, down: 1, age_hours: 1, views: 300 },
            Post { id: "classic", up: 900, down: 40, age_hours: 96, views: 50_000 },
            Post { id: "flamewar", up: 400, down: 380, age_hours: 5, views: 9_000 },
            Post { id: "new", up: 0, down: 0, age_hours: 0, views: 0 },
        ]
    }

    #[test]
    fn front_page_favors_recent_activity() {
        let config = HotScoreConfig::default();
        let mut posts = feed();
        posts.sort_by(|a, b| {
            let score = |p: &Post| {
                hot_score_at(p.up, p.down, NOW - p.age_hours * MS_PER_HOUR, p.views, NOW, &config)
            };
            score(b).total_cmp(&score(a))
        });
        let order: Vec<_> = posts.iter().map(|p| p.id).collect();
        // Four days of decay outweigh 900 upvotes against a 5-hour-old flamewar
        assert_eq!(order, vec!["fresh", "flamewar", "classic", "new"]);
    }

    #[test]
    fn best_tab_and_controversial_tab_disagree() {
        let posts = feed();
        let best = posts
            .iter()
            .max_by(|a, b| wilson_score(a.up, a.up + a.down).total_cmp(&wilson_score(b.up, b.up + b.down)))
            .map(|p| p.id);
        let controversial = posts
            .iter()
            .max_by(|a, b| controversy_score(a.up, a.down).total_cmp(&controversy_score(b.up, b.down)))
            .map(|p| p.id);
        assert_eq!(best, Some("classic"));
        assert_eq!(controversial, Some("flamewar"));
        assert_eq!(wilson_score(0, 0), 0.0);
    }

    #[test]
    fn ratings_and_decay() {
        // A single 5-star rating does not beat a well-established 4.6
        let newcomer = bayesian_average(5.0, 1, 3.8, 20.0);
        let established = bayesian_average(4.6, 500, 3.8, 20.0);
        assert!(established > newcomer);

        let decay = ExponentialDecay::from_half_life(24.0).unwrap();
        let views = [(NOW, 100.0), (NOW - 24 * MS_PER_HOUR, 100.0)];
        assert!((decay.weighted_sum(&views, NOW) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn creator_leaderboard() {
        let interactions = [
            ("fan1", "star"),
            ("fan2", "star"),
            ("fan3", "star"),
            ("star", "mentor"),
            ("fan1", "fan2"),
        ];
        let result = authority_scores(&interactions, &AuthorityConfig::default()).unwrap();
        assert!(result.converged);
        let ranked = result.ranked();
        assert_eq!(ranked[0].0, "mentor", "endorsed by the most endorsed user");
        assert_eq!(ranked[1].0, "star");
    }
}

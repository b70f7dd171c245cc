//! Composition of one listing page.
//!
//! With no active criteria the board shows featured postings and the most
//! recent ones. Once the visitor searches or filters, featured postings are
//! hidden and same-industry suggestions are added below the results.

use crate::criteria::FilterCriteria;
use crate::model::JobRecord;
use crate::query::JobCatalogQuery;
use std::collections::HashSet;

pub const DEFAULT_LATEST_LIMIT: usize = 10;
pub const DEFAULT_RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub searching: bool,
    pub featured: Vec<&'a JobRecord>,
    pub listings: Vec<&'a JobRecord>,
    pub related: Vec<&'a JobRecord>,
}

impl BoardView<'_> {
    pub fn result_count(&self) -> usize {
        self.listings.len()
    }
}

impl JobCatalogQuery {
    pub fn board(
        &self,
        criteria: &FilterCriteria,
        latest_limit: usize,
        related_limit: usize,
    ) -> BoardView<'_> {
        if !criteria.is_active() {
            return BoardView {
                searching: false,
                featured: self.featured(),
                listings: self.latest(latest_limit),
                related: Vec::new(),
            };
        }

        let listings = self.search(criteria);
        let shown: HashSet<&str> = listings.iter().map(|job| job.id.as_str()).collect();
        let related = self.related_to(&listings, &shown, related_limit);
        BoardView {
            searching: true,
            featured: Vec::new(),
            listings,
            related,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn catalog() -> JobCatalogQuery {
        JobCatalogQuery::new(seed::jobs()).unwrap()
    }

    #[test]
    fn test_idle_board_shows_featured_and_latest() {
        let catalog = catalog();
        let board = catalog.board(
            &FilterCriteria::default(),
            DEFAULT_LATEST_LIMIT,
            DEFAULT_RELATED_LIMIT,
        );

        assert!(!board.searching);
        assert_eq!(board.featured.len(), 3);
        assert_eq!(board.result_count(), 10);
        assert_eq!(board.listings[0].id, "ai-3");
        assert!(board.related.is_empty());
    }

    #[test]
    fn test_search_board_hides_featured_and_suggests_related() {
        let catalog = catalog();
        let board = catalog.board(
            &FilterCriteria::text("machine learning"),
            DEFAULT_LATEST_LIMIT,
            DEFAULT_RELATED_LIMIT,
        );

        assert!(board.searching);
        assert!(board.featured.is_empty());
        let listed: Vec<&str> = board.listings.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(listed, vec!["ai-3", "ai-1"]);
        let related: Vec<&str> = board.related.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(related, vec!["ai-2"]);
    }

    #[test]
    fn test_search_board_with_no_results_has_no_related() {
        let catalog = catalog();
        let board = catalog.board(&FilterCriteria::text("blockchain"), 10, 3);

        assert!(board.searching);
        assert_eq!(board.result_count(), 0);
        assert!(board.related.is_empty());
    }
}

//! Photo grid construction
//!
//! Turns a list snapshot into the cards the grid draws. Every card carries
//! the action its delete control triggers, captured here at build time, so
//! the input handlers never have to look a photo up again by position.

use crate::api::{self, Photo};

/// Text shown in place of cards when the collection is empty
pub const EMPTY_GRID_MESSAGE: &str = "Nenhuma foto encontrada";

/// Action bound to a card's control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Delete { photo_id: String },
}

/// One rendered photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCard {
    pub photo_id: String,
    pub name: String,
    pub image_url: String,
    pub action: CardAction,
}

/// What the grid area shows for a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GridContent {
    /// No photos: draw the placeholder message
    #[default]
    Empty,
    Cards(Vec<PhotoCard>),
}

impl GridContent {
    pub fn cards(&self) -> &[PhotoCard] {
        match self {
            GridContent::Empty => &[],
            GridContent::Cards(cards) => cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}

/// Build the grid content for a snapshot, one card per photo in API order
///
/// # Examples
/// ```
/// use photogrid::api::Photo;
/// use photogrid::logic::grid::{build_grid, CardAction, GridContent};
///
/// let photos = vec![Photo { id: "1".to_string(), name: "Cat".to_string() }];
/// let grid = build_grid(&photos, "http://localhost:4000/pictures");
/// let cards = grid.cards();
/// assert_eq!(cards.len(), 1);
/// assert_eq!(cards[0].name, "Cat");
/// assert_eq!(cards[0].action, CardAction::Delete { photo_id: "1".to_string() });
///
/// assert_eq!(build_grid(&[], "http://localhost:4000/pictures"), GridContent::Empty);
/// ```
pub fn build_grid(photos: &[Photo], base_url: &str) -> GridContent {
    if photos.is_empty() {
        return GridContent::Empty;
    }

    GridContent::Cards(
        photos
            .iter()
            .map(|photo| PhotoCard {
                photo_id: photo.id.clone(),
                name: photo.name.clone(),
                image_url: api::image_url(base_url, &photo.id),
                action: CardAction::Delete {
                    photo_id: photo.id.clone(),
                },
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, name: &str) -> Photo {
        Photo {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_one_card_per_photo_in_order() {
        let photos = vec![photo("3", "Dog"), photo("1", "Cat"), photo("2", "Bird")];
        let grid = build_grid(&photos, "http://h/pictures");

        let names: Vec<&str> = grid.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dog", "Cat", "Bird"]);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_empty_collection_gives_placeholder() {
        let grid = build_grid(&[], "http://h/pictures");
        assert_eq!(grid, GridContent::Empty);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_card_action_captures_its_own_id() {
        let photos = vec![photo("a", "A"), photo("b", "B")];
        let grid = build_grid(&photos, "http://h/pictures");

        for (card, photo) in grid.cards().iter().zip(&photos) {
            assert_eq!(
                card.action,
                CardAction::Delete {
                    photo_id: photo.id.clone()
                }
            );
        }
    }

    #[test]
    fn test_card_image_url_derived_from_id() {
        let grid = build_grid(&[photo("42", "x")], "http://h/pictures");
        assert_eq!(grid.cards()[0].image_url, "http://h/pictures/42/image");
    }

    #[test]
    fn test_duplicate_names_still_get_separate_cards() {
        let grid = build_grid(&[photo("1", "Cat"), photo("2", "Cat")], "http://h/p");
        assert_eq!(grid.len(), 2);
        assert_ne!(grid.cards()[0].action, grid.cards()[1].action);
    }
}

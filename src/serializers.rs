//! Response shaping: project rows (and one level of joined rows) into camelCase JSON records.

use crate::models::{GameRow, GamerRow, Gametype, ProfileEventRow, User};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        UserView {
            first_name: u.first_name,
            last_name: u.last_name,
            username: u.username,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GametypeView {
    pub id: i32,
    pub label: String,
}

impl From<Gametype> for GametypeView {
    fn from(g: Gametype) -> Self {
        GametypeView { id: g.id, label: g.label }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatorView {
    pub id: i32,
    pub bio: String,
    pub user: UserView,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: i32,
    pub name: String,
    pub player_limit: i32,
    pub event_count: i64,
    pub created_by: CreatorView,
    pub gametype: GametypeView,
}

impl From<GameRow> for GameView {
    fn from(r: GameRow) -> Self {
        GameView {
            id: r.id,
            name: r.name,
            player_limit: r.player_limit,
            event_count: r.event_count,
            created_by: CreatorView {
                id: r.creator_id,
                bio: r.creator_bio,
                user: UserView {
                    first_name: r.creator_first_name,
                    last_name: r.creator_last_name,
                    username: r.creator_username,
                },
            },
            gametype: GametypeView {
                id: r.gametype_id,
                label: r.gametype_label,
            },
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GamerView {
    pub user: UserView,
    pub bio: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EventGameView {
    pub name: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProfileEventView {
    pub id: i32,
    pub game: EventGameView,
    pub name: String,
    pub time: DateTime<Utc>,
}

impl From<ProfileEventRow> for ProfileEventView {
    fn from(r: ProfileEventRow) -> Self {
        ProfileEventView {
            id: r.id,
            game: EventGameView { name: r.game_name },
            name: r.name,
            time: r.time,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProfileView {
    pub gamer: GamerView,
    pub events: Vec<ProfileEventView>,
}

impl ProfileView {
    pub fn new(gamer: &GamerRow, events: Vec<ProfileEventRow>) -> Self {
        ProfileView {
            gamer: GamerView {
                user: gamer.user().into(),
                bio: gamer.bio.clone(),
            },
            events: events.into_iter().map(ProfileEventView::from).collect(),
        }
    }
}

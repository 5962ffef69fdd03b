//! Idea Arena: 로컬 우선 아이디어 게시판과 스팸 필터.

pub mod board;
pub mod spam;

pub use board::{
    ArenaMode, Idea, IdeaBoard, IdeaMirror, MirrorError, SortMode, SubmitError, ANONYMOUS,
    MAX_IDEA_CHARS,
};
pub use spam::looks_like_spam;

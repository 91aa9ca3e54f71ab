/// State management module
/// 
/// This module handles all application state, including:
/// - EPIC image records and the distance calculation (data.rs)
/// - The ban list of distance labels (ban_list.rs)
/// - Ban-aware random selection (selector.rs)
/// - The session tying selection and bans together (session.rs)

pub mod data;
pub mod ban_list;
pub mod selector;
pub mod session;

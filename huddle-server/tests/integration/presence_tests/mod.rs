mod test_guest_in_roster;
mod test_join_broadcasts_roster;
mod test_leave_triggers_rebroadcast;

mod test_chat_reaches_current_members;
mod test_relay_verbatim;

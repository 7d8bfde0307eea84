mod test_create_room_with_wrong_password;
mod test_join_room_wrong_key;
mod test_leave_room_notifies_remaining;

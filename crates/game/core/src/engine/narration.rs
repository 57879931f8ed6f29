//! Narration strings shown in the battle text box.

pub fn topic_announcement(topic: &str) -> String {
    format!("Battle topic: {topic}. What will you do?")
}

pub fn turn_prompt(topic: &str) -> String {
    format!("Topic: {topic}. What will you do?")
}

pub fn move_used(attacker: &str, move_name: &str) -> String {
    format!("{attacker} used {move_name}!")
}

pub fn move_hit(attacker: &str, move_name: &str, damage: u32) -> String {
    format!("{attacker} used {move_name}! It did {damage} damage!")
}

pub fn victory(enemy: &str) -> String {
    format!("{enemy} fainted! You won the battle!")
}

pub fn defeat(player: &str) -> String {
    format!("{player} fainted! You lost the battle!")
}

mod test_enemies;
mod test_evaluate;

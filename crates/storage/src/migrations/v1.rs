//! Migration v1: characters and moves

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS characters (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    weight REAL,
    run_speed REAL,
    walk_speed REAL,
    air_speed REAL,
    fall_speed REAL,
    fast_fall_speed REAL,
    sh_air_time INTEGER,
    sh_ff_air_time INTEGER,
    fh_air_time INTEGER,
    fh_ff_air_time INTEGER
);

CREATE TABLE IF NOT EXISTS moves (
    id INTEGER PRIMARY KEY,
    char_id INTEGER NOT NULL,
    move_name TEXT,
    input_type TEXT,
    startup INTEGER,
    total_frames INTEGER,
    landing_lag INTEGER,
    shield_advantage INTEGER,
    base_damage REAL,
    note TEXT,
    FOREIGN KEY(char_id) REFERENCES characters(id)
);

-- Tables created by older tooling may lack the column-level UNIQUE.
CREATE UNIQUE INDEX IF NOT EXISTS idx_characters_name ON characters(name);
CREATE INDEX IF NOT EXISTS idx_moves_char ON moves(char_id);
";

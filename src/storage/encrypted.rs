//! SQLite-backed store with AES-GCM encryption of the answer payload.
//! Questionnaire answers are sensitive mental-health data; only the predicted
//! label and timestamp are stored in the clear for retention queries.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;

const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

fn derive_key(seed: &[u8]) -> [u8; KEY_LEN] {
    use ring::digest;
    let mut out = [0u8; KEY_LEN];
    let h = digest::digest(&digest::SHA256, seed);
    out[..h.as_ref().len().min(KEY_LEN)].copy_from_slice(h.as_ref());
    out
}

fn encrypt(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<String, aes_gcm::Error> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| aes_gcm::Error)?;
    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);
    let ciphertext = cipher.encrypt((&nonce).into(), plaintext)?;
    let mut out = nonce.to_vec();
    out.extend(ciphertext);
    Ok(BASE64.encode(&out))
}

fn decrypt(key: &[u8; KEY_LEN], encoded: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let raw = BASE64.decode(encoded)?;
    if raw.len() < NONCE_LEN {
        return Err("payload too short".into());
    }
    let (nonce, ct) = raw.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|e| format!("{:?}", e))?;
    Ok(cipher
        .decrypt(nonce.into(), ct)
        .map_err(|e| format!("{:?}", e))?)
}

pub struct ResponseStore {
    conn: Mutex<Connection>,
    key: [u8; KEY_LEN],
}

impl ResponseStore {
    /// Open or create DB at path. Key is derived from `secret` (in production: device-bound).
    pub fn open(path: &Path, secret: &[u8]) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS responses (
                id TEXT PRIMARY KEY,
                ts INTEGER NOT NULL,
                label TEXT NOT NULL,
                answers_enc TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_responses_ts ON responses(ts);
            CREATE TABLE IF NOT EXISTS meta (k TEXT PRIMARY KEY, v TEXT);
            "#,
        )?;
        let key = derive_key(secret);
        Ok(Self {
            conn: Mutex::new(conn),
            key,
        })
    }

    /// Insert a completed response (answers stored encrypted)
    pub fn insert_response(
        &self,
        id: &str,
        ts: i64,
        label: &str,
        answers_json: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let enc = encrypt(&self.key, answers_json.as_bytes()).map_err(|e| format!("{:?}", e))?;
        self.conn.lock().unwrap().execute(
            "INSERT OR REPLACE INTO responses (id, ts, label, answers_enc) VALUES (?1, ?2, ?3, ?4)",
            params![id, ts, label, enc],
        )?;
        Ok(())
    }

    /// Read response by id (decrypt answers)
    pub fn get_response(&self, id: &str) -> Result<Option<(i64, String, String)>, Box<dyn std::error::Error + Send + Sync>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT ts, label, answers_enc FROM responses WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            let ts: i64 = row.get(0)?;
            let label: String = row.get(1)?;
            let enc: String = row.get(2)?;
            let plain = decrypt(&self.key, &enc)?;
            let answers = String::from_utf8(plain).unwrap_or_default();
            return Ok(Some((ts, label, answers)));
        }
        Ok(None)
    }

    /// Retention: delete responses older than given timestamp
    pub fn prune_before(&self, ts: i64) -> Result<u64, rusqlite::Error> {
        let n = self.conn.lock().unwrap().execute("DELETE FROM responses WHERE ts < ?1", params![ts])?;
        Ok(n as u64)
    }
}

//! Input table fixtures written to a scratch directory

use birdsong_join::services::ImageOverrides;
use birdsong_join::PipelineConfig;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Multimedia header as exported by GBIF (subset plus an unused column)
pub const MULTIMEDIA_HEADER: &str =
    "gbifID\ttype\tformat\tidentifier\treferences\tlicense\trightsHolder\n";

/// Occurrence header with every column the join reads
pub const OCCURRENCE_HEADER: &str = "gbifID\tspeciesKey\tlevel0Name\tlevel1Name\tlevel2Name\tsex\tfieldNotes\tscientificName\thigherClassification\tkingdom\tphylum\tclass\torder\tfamily\tgenus\tvernacularName\n";

pub fn sound_row(gbif_id: &str, uri: &str, license: &str, rights_holder: &str) -> String {
    format!(
        "{}\tSound\taudio/mpeg\t{}\thttps://xeno-canto.org/{}\t{}\t{}\n",
        gbif_id, uri, gbif_id, license, rights_holder
    )
}

pub fn still_image_row(gbif_id: &str, uri: &str) -> String {
    format!(
        "{}\tStillImage\timage/jpeg\t{}\t\tCC0\tPhotographer\n",
        gbif_id, uri
    )
}

/// One occurrence row; unspecified fields take plausible defaults
#[derive(Debug, Clone)]
pub struct Occurrence<'a> {
    pub gbif_id: &'a str,
    pub species_key: &'a str,
    pub location: &'a str,
    pub sex: &'a str,
    pub field_notes: &'a str,
    pub scientific_name: &'a str,
    pub vernacular_name: &'a str,
}

impl<'a> Occurrence<'a> {
    pub fn new(gbif_id: &'a str, species_key: &'a str) -> Self {
        Self {
            gbif_id,
            species_key,
            location: "United Kingdom",
            sex: "",
            field_notes: "",
            scientific_name: "Turdus merula Linnaeus, 1758",
            vernacular_name: "Eurasian Blackbird",
        }
    }

    pub fn location(mut self, location: &'a str) -> Self {
        self.location = location;
        self
    }

    pub fn sex(mut self, sex: &'a str) -> Self {
        self.sex = sex;
        self
    }

    pub fn field_notes(mut self, notes: &'a str) -> Self {
        self.field_notes = notes;
        self
    }

    pub fn names(mut self, scientific_name: &'a str, vernacular_name: &'a str) -> Self {
        self.scientific_name = scientific_name;
        self.vernacular_name = vernacular_name;
        self
    }
}

pub fn occurrence_row(o: &Occurrence) -> String {
    format!(
        "{}\t{}\t{}\tEngland\tDevon\t{}\t{}\t{}\tAnimalia|Chordata|Aves|Passeriformes\tAnimalia\tChordata\tAves\tPasseriformes\tTurdidae\tTurdus\t{}\n",
        o.gbif_id,
        o.species_key,
        o.location,
        o.sex,
        o.field_notes,
        o.scientific_name,
        o.vernacular_name
    )
}

/// Scratch directory holding both input tables
pub struct Fixture {
    pub dir: TempDir,
    pub multimedia_path: PathBuf,
    pub occurrence_path: PathBuf,
    pub output_path: PathBuf,
}

impl Fixture {
    pub fn new(multimedia_rows: &[String], occurrences: &[Occurrence]) -> Self {
        let occurrence_rows: Vec<String> = occurrences.iter().map(occurrence_row).collect();
        Self::from_raw(
            &format!("{}{}", MULTIMEDIA_HEADER, multimedia_rows.concat()),
            &format!("{}{}", OCCURRENCE_HEADER, occurrence_rows.concat()),
        )
    }

    /// Tables given verbatim, header included
    pub fn from_raw(multimedia: &str, occurrence: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let multimedia_path = dir.path().join("multimedia.txt");
        let occurrence_path = dir.path().join("occurrence.txt");
        let output_path = dir.path().join("out").join("birdsong.json");

        fs::write(&multimedia_path, multimedia).unwrap();
        fs::write(&occurrence_path, occurrence).unwrap();

        Self {
            dir,
            multimedia_path,
            occurrence_path,
            output_path,
        }
    }

    /// Config over this fixture with no picture overrides
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig {
            multimedia_path: self.multimedia_path.clone(),
            occurrence_path: self.occurrence_path.clone(),
            output_path: self.output_path.clone(),
            image_overrides: ImageOverrides::empty(),
            ..PipelineConfig::default()
        }
    }

    pub fn output_exists(&self) -> bool {
        self.output_path.exists()
    }

    pub fn read_output(&self) -> Value {
        let text = fs::read_to_string(&self.output_path).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

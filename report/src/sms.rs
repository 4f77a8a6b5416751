use crate::SummaryRecord;

/// Marker the board firmware looks for before forwarding a line as SMS.
pub const SMS_PREFIX: &str = "SMS:";

/// Condenses a summary into the single line sent back to the sensor board.
///
/// `SMS:Soil:<label>, Mois:<m>, Temp:<t>C, Hum:<h>%, Crop:<crop>, Note:<advice>\n`
pub fn sms_line(summary: &SummaryRecord) -> String {
    format!(
        "{}Soil:{}, Mois:{:.1}, Temp:{:.1}C, Hum:{:.1}%, Crop:{}, Note:{}\n",
        SMS_PREFIX,
        summary.soil_type.label(),
        summary.averages.soil_moisture,
        summary.averages.temperature,
        summary.averages.humidity,
        summary.recommendation,
        summary.advice
    )
}
